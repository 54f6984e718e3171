//! Closed enumerations understood by the RapiDoc viewer
//!
//! Each enumeration is stored in the attribute map as the lower-cased member
//! name and parsed back case-insensitively. A stored value that matches no
//! member is a programming error upstream and fails the read, it is never
//! silently replaced by a default.

/// Common behavior of enumerations stored as string attributes
pub trait AttributeEnum: Sized + Copy {
    /// Name of the enumeration, used in parse error messages
    const NAME: &'static str;

    /// The lower-case attribute value understood by the viewer
    fn as_str(self) -> &'static str;

    /// Parse a stored attribute value, ignoring ASCII case
    fn from_attribute(value: &str) -> Option<Self>;
}

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl AttributeEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            fn from_attribute(value: &str) -> Option<Self> {
                $( if value.eq_ignore_ascii_case($text) {
                    return Some(Self::$variant);
                } )+
                None
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

attribute_enum! {
    /// Ordering of endpoints within each tag
    SortEndpointsBy {
        /// Order by operation path
        Path => "path",
        /// Order by HTTP method
        Method => "method",
        /// Order by operation summary
        Summary => "summary",
        /// Keep specification order
        None => "none",
    }
}

attribute_enum! {
    /// Base color theme used for deriving UI component colors
    Theme {
        Dark => "dark",
        Light => "light",
    }
}

attribute_enum! {
    /// Relative font sizing for the entire document
    FontSize {
        Default => "default",
        Large => "large",
        Largest => "largest",
    }
}

attribute_enum! {
    /// Spacing of items in the navigation bar
    NavItemSpacing {
        Default => "default",
        Compact => "compact",
        Relaxed => "relaxed",
    }
}

attribute_enum! {
    /// Placement of request/response sections
    Layout {
        /// Side by side
        Row => "row",
        /// One below the other
        Column => "column",
    }
}

attribute_enum! {
    /// Overall display mode of the documentation
    RenderStyle {
        Read => "read",
        View => "view",
        Focused => "focused",
    }
}

attribute_enum! {
    /// Display mode for object schemas in requests and responses
    SchemaStyle {
        Tree => "tree",
        Table => "table",
    }
}

attribute_enum! {
    /// Visibility rule for read-only schema fields
    SchemaHideReadOnly {
        /// Hide read-only fields in requests
        Default => "default",
        /// Never hide read-only fields
        Never => "never",
    }
}

attribute_enum! {
    /// Visibility rule for write-only schema fields
    SchemaHideWriteOnly {
        /// Hide write-only fields in responses
        Default => "default",
        /// Never hide write-only fields
        Never => "never",
    }
}

attribute_enum! {
    /// Default active tab in the schema view
    DefaultSchemaTab {
        Model => "model",
        Schema => "schema",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SortEndpointsBy::Path, "path")]
    #[case(SortEndpointsBy::Method, "method")]
    #[case(SortEndpointsBy::Summary, "summary")]
    #[case(SortEndpointsBy::None, "none")]
    fn test_sort_endpoints_by_round_trip(#[case] member: SortEndpointsBy, #[case] text: &str) {
        assert_eq!(member.as_str(), text);
        assert_eq!(SortEndpointsBy::from_attribute(text), Some(member));
    }

    #[rstest]
    #[case(Theme::Dark, "dark")]
    #[case(Theme::Light, "light")]
    fn test_theme_round_trip(#[case] member: Theme, #[case] text: &str) {
        assert_eq!(member.as_str(), text);
        assert_eq!(Theme::from_attribute(text), Some(member));
    }

    #[rstest]
    #[case("READ", Some(RenderStyle::Read))]
    #[case("Focused", Some(RenderStyle::Focused))]
    #[case("view", Some(RenderStyle::View))]
    #[case("bogus", None)]
    fn test_case_insensitive_parse(#[case] text: &str, #[case] expected: Option<RenderStyle>) {
        assert_eq!(RenderStyle::from_attribute(text), expected);
    }

    #[test]
    fn test_unknown_member_rejected() {
        assert_eq!(Theme::from_attribute("solarized"), None);
        assert_eq!(SortEndpointsBy::from_attribute(""), None);
        assert_eq!(DefaultSchemaTab::from_attribute("example"), None);
    }

    #[test]
    fn test_display_matches_attribute_value() {
        assert_eq!(Layout::Column.to_string(), "column");
        assert_eq!(SchemaHideReadOnly::Never.to_string(), "never");
        assert_eq!(FontSize::Largest.to_string(), "largest");
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(SortEndpointsBy::NAME, "SortEndpointsBy");
        assert_eq!(SchemaStyle::NAME, "SchemaStyle");
    }
}
