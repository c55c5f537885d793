// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Application state. `liked` starts `false`, and once it is `true` nothing sets it back.
///
/// Earlier versions of this state called the flag `clicked`. That name is still accepted
/// when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LikeState {
    #[serde(alias = "clicked")]
    pub liked: bool,
}

impl LikeState {
    pub const INIT: LikeState = LikeState { liked: false };
    pub const LIKED: LikeState = LikeState { liked: true };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_is_not_liked() {
        assert_eq!(LikeState::default(), LikeState::INIT);
        assert!(!LikeState::default().liked);
    }

    #[test]
    fn test_serde_json_shape() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&LikeState::LIKED)?, r#"{"liked":true}"#);
        assert_eq!(
            serde_json::from_str::<LikeState>(r#"{"liked":false}"#)?,
            LikeState::INIT
        );
        Ok(())
    }

    #[test]
    fn test_legacy_clicked_field_is_accepted() -> serde_json::Result<()> {
        assert_eq!(
            serde_json::from_str::<LikeState>(r#"{"clicked":true}"#)?,
            LikeState::LIKED
        );
        Ok(())
    }
}
