use std::fmt;

use serde::{Deserialize, Serialize};

/// The card part table. Invokes `$callback!` once with every row:
///
/// ```text
/// /// docs
/// ComponentName => CardPartVariant, STATIC_NAME, element, "default classes";
/// ```
///
/// `element` is the lowercase HTML tag name. This crate builds the `static`
/// definitions and [`CardPart`] from it; UI crates build their components from
/// the same rows, so the rendered element and [`CardDefinition::tag`] cannot
/// drift apart.
#[macro_export]
macro_rules! with_card_parts {
    ($callback:ident) => {
        $callback! {
            /// Card container: rounded corners, border, background and shadow.
            Card => Card, CARD, div,
                "rounded-xl border bg-card text-card-foreground shadow";
            /// Header section holding the title, description and actions.
            CardHeader => Header, CARD_HEADER, div,
                "flex flex-col space-y-1.5 p-6";
            /// Card title. Always an `<h2>`.
            CardTitle => Title, CARD_TITLE, h2,
                "font-semibold leading-none tracking-tight";
            /// Muted secondary text under the title.
            CardDescription => Description, CARD_DESCRIPTION, div,
                "text-sm text-muted-foreground";
            /// Main body. No top padding so it sits flush under the header.
            CardContent => Content, CARD_CONTENT, div,
                "p-6 pt-0";
            /// Footer row for actions or a summary.
            CardFooter => Footer, CARD_FOOTER, div,
                "flex items-center p-6 pt-0";
        }
    };
}

/// Maps a lowercase tag name from the part table to its [`ElementTag`].
macro_rules! element_tag {
    (div) => {
        ElementTag::Div
    };
    (h2) => {
        ElementTag::H2
    };
}

/// Element kinds a card part can render as.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementTag {
    #[default]
    Div,
    H2,
}

impl ElementTag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ElementTag::Div => "div",
            ElementTag::H2 => "h2",
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named template for one kind of card element: a display name, the
/// classes every render starts from, and the element it renders as.
///
/// Definitions are built in `const` context and live in `static`s, so they are
/// shared freely between render trees and threads.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CardDefinition {
    name: &'static str,
    tag: ElementTag,
    default_class: &'static str,
}

impl CardDefinition {
    /// Creates a definition rendering as a plain `div`.
    ///
    /// Panics if `name` is empty; in a `static` initializer that is a
    /// compile error.
    pub const fn new(name: &'static str, default_class: &'static str) -> Self {
        assert!(!name.is_empty(), "card definition name must not be empty");
        Self {
            name,
            tag: ElementTag::Div,
            default_class,
        }
    }

    pub const fn with_tag(self, tag: ElementTag) -> Self {
        Self { tag, ..self }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn tag(&self) -> ElementTag {
        self.tag
    }

    pub const fn default_class(&self) -> &'static str {
        self.default_class
    }

    /// Class list for one render: the defaults followed by `extra`.
    pub fn merge_class(&self, extra: Option<&str>) -> String {
        merge_class(self.default_class, extra)
    }
}

/// Appends `extra` to `base` with a single space. A blank override is dropped
/// so the defaults come back untouched; any other override is appended as
/// given. Ordering is all this guarantees; which of two conflicting classes
/// wins is up to the stylesheet.
pub fn merge_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => {
            if base.is_empty() {
                extra.to_string()
            } else {
                format!("{base} {extra}")
            }
        }
        _ => base.to_string(),
    }
}

macro_rules! card_definitions {
    ($($(#[$meta:meta])* $component:ident => $part:ident, $static:ident, $element:ident, $class:literal;)*) => {
        $(
            $(#[$meta])*
            pub static $static: CardDefinition =
                CardDefinition::new(stringify!($component), $class).with_tag(element_tag!($element));
        )*

        /// The closed set of card parts.
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum CardPart {
            $($part,)*
        }

        impl CardPart {
            /// Every part, in table order.
            pub const ALL: &'static [CardPart] = &[$(CardPart::$part,)*];

            pub fn definition(&self) -> &'static CardDefinition {
                match self {
                    $(CardPart::$part => &$static,)*
                }
            }
        }
    };
}

with_card_parts!(card_definitions);

impl CardPart {
    /// Looks a part up by its display name (`"CardTitle"`, ...).
    pub fn from_name(name: &str) -> Option<CardPart> {
        CardPart::ALL
            .iter()
            .copied()
            .find(|part| part.definition().name() == name)
    }

    pub fn definitions() -> impl Iterator<Item = &'static CardDefinition> {
        CardPart::ALL.iter().map(|part| part.definition())
    }
}

impl fmt::Display for CardPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name())
    }
}
