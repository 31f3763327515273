//! Toggle state of a like form and the icon it renders

use std::fmt;

use crate::value_objects::LikeId;

/// Whether the current user likes a message
///
/// `Liked` carries the id of the server-side record, which is what a later
/// unlike has to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikeState {
    #[default]
    Unliked,
    Liked(LikeId),
}

impl LikeState {
    /// Build the state from an optional like id, as found in page data
    #[must_use]
    pub fn from_marker(likes_id: Option<LikeId>) -> Self {
        likes_id.map_or(Self::Unliked, Self::Liked)
    }

    #[must_use]
    pub fn is_liked(&self) -> bool {
        matches!(self, Self::Liked(_))
    }

    /// The like id marker, if any
    #[must_use]
    pub fn likes_id(&self) -> Option<LikeId> {
        match self {
            Self::Liked(id) => Some(*id),
            Self::Unliked => None,
        }
    }

    /// Icon that matches this state
    #[must_use]
    pub fn icon(&self) -> LikeIcon {
        match self {
            Self::Liked(_) => LikeIcon::Filled,
            Self::Unliked => LikeIcon::Outline,
        }
    }
}

/// Thumbs-up glyph shown in the like button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikeIcon {
    /// Solid thumbs-up
    Filled,
    /// Outlined thumbs-up
    #[default]
    Outline,
}

impl LikeIcon {
    /// Font Awesome classes for the glyph
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Filled => "fas fa-thumbs-up",
            Self::Outline => "far fa-thumbs-up",
        }
    }

    /// Markup placed inside the button
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(r#"<i class="{}"></i>"#, self.css_class())
    }
}

impl fmt::Display for LikeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}
