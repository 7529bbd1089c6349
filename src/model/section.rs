use serde::{Deserialize, Serialize};

/// Markup for one host container plus whether the container should be shown.
///
/// When there is nothing to show, `body` is empty, `visible` is false and
/// `placeholder` carries the paragraph the host displays instead.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub body: String,
    pub visible: bool,

    #[serde(default)]
    pub placeholder: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FragmentOutcome {
    Replace { markup: String },
    Remove,
}
