//! Lenient string tokens for enumerated slide fields.
//!
//! Decks are hand-edited JSON as often as they are produced by an editor, so
//! an unknown token must never fail the whole load. Unknown strings land in
//! the fallback variant, survive re-serialization unchanged and render with
//! the documented default.

macro_rules! string_token {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($fallback:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Token this version does not know; kept verbatim.
            $fallback(String),
        }

        impl $name {
            /// Every known variant, in declaration order.
            pub fn known() -> Vec<$name> {
                vec![$( $name::$variant ),+]
            }

            /// Stable string form used in JSON.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $text, )+
                    Self::$fallback(raw) => raw,
                }
            }

            /// Parse a token. Never fails: unknown input becomes the fallback variant.
            pub fn from_token(raw: &str) -> Self {
                match raw {
                    $( $text => Self::$variant, )+
                    other => Self::$fallback(other.to_string()),
                }
            }

            /// True for every variant except the fallback.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::$fallback(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from_token(&raw)
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> Self {
                token.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_token;

#[cfg(test)]
mod tests {
    string_token! {
        pub enum Shade (Unknown) {
            Light => "light",
            Dark => "dark",
        }
    }

    #[test]
    fn known_tokens_parse() {
        assert_eq!(Shade::from_token("light"), Shade::Light);
        assert_eq!(Shade::from_token("dark"), Shade::Dark);
        assert!(Shade::Dark.is_known());
    }

    #[test]
    fn unknown_token_is_preserved() {
        let shade = Shade::from_token("sepia");
        assert_eq!(shade, Shade::Unknown("sepia".to_string()));
        assert!(!shade.is_known());
        assert_eq!(String::from(shade), "sepia");
    }

    #[test]
    fn serde_round_trip_keeps_unknown_text() {
        let parsed: Vec<Shade> = serde_json::from_str(r#"["dark","neon"]"#).unwrap();
        assert_eq!(parsed[0], Shade::Dark);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"["dark","neon"]"#);
    }

    #[test]
    fn known_lists_variants_in_order() {
        assert_eq!(Shade::known(), vec![Shade::Light, Shade::Dark]);
    }
}
