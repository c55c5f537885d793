// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{convert::Infallible,
          fmt::{Display, Formatter},
          str::FromStr};

use serde::{Deserialize, Serialize};

/// The only tag that changes [`crate::LikeState`].
pub const PAGE_LIKED: &str = "PAGE_LIKED";

/// A tagged signal, with no payload. Anything other than [`PAGE_LIKED`] (including a
/// missing tag) is kept as [`LikeAction::Unrecognized`] and leaves the state alone.
///
/// The JSON form is `{"type": "PAGE_LIKED"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawAction", into = "RawAction")]
pub enum LikeAction {
    PageLiked,
    Unrecognized(Option<String>),
}

impl Default for LikeAction {
    fn default() -> Self { Self::Unrecognized(None) }
}

impl LikeAction {
    /// Action creator bound to the button's notify callback.
    #[must_use]
    pub fn page_liked() -> Self { Self::PageLiked }

    #[must_use]
    pub fn from_tag(maybe_tag: Option<&str>) -> Self {
        match maybe_tag {
            Some(PAGE_LIKED) => Self::PageLiked,
            other => Self::Unrecognized(other.map(str::to_string)),
        }
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::PageLiked => Some(PAGE_LIKED),
            Self::Unrecognized(maybe_tag) => maybe_tag.as_deref(),
        }
    }
}

impl FromStr for LikeAction {
    type Err = Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> { Ok(Self::from_tag(Some(tag))) }
}

impl Display for LikeAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag().unwrap_or("<no tag>"))
    }
}

/// Wire shape of an action.
#[derive(Serialize, Deserialize)]
struct RawAction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
}

impl From<RawAction> for LikeAction {
    fn from(raw: RawAction) -> Self { Self::from_tag(raw.tag.as_deref()) }
}

impl From<LikeAction> for RawAction {
    fn from(action: LikeAction) -> Self {
        Self {
            tag: action.tag().map(str::to_string),
        }
    }
}
