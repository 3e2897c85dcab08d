use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

macro_rules! checkout_locales {
    (@count) => { 0 };
    (@count $head:ident $($tail:ident)*) => { 1 + checkout_locales!(@count $($tail)*) };
    (
        $default:ident => $default_token:literal,
        $($variant:ident => $token:literal,)+
    ) => {
        /// Language/region shown on the hosted checkout page.
        ///
        /// Serializes as the exact token the checkout client expects, e.g. `"fr-CA"`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        pub enum CheckoutLocale {
            #[default]
            #[serde(rename = $default_token)]
            $default,
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl CheckoutLocale {
            pub const ALL: [CheckoutLocale; checkout_locales!(@count $default $($variant)+)] =
                [CheckoutLocale::$default, $(CheckoutLocale::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    CheckoutLocale::$default => $default_token,
                    $(CheckoutLocale::$variant => $token,)+
                }
            }
        }

        impl FromStr for CheckoutLocale {
            type Err = CheckoutError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $default_token => Ok(CheckoutLocale::$default),
                    $($token => Ok(CheckoutLocale::$variant),)+
                    other => Err(CheckoutError::UnknownLocale(other.to_string())),
                }
            }
        }
    };
}

checkout_locales! {
    Auto => "auto",
    Bg => "bg",
    Cs => "cs",
    Da => "da",
    De => "de",
    El => "el",
    En => "en",
    EnGb => "en-GB",
    Es => "es",
    Es419 => "es-419",
    Et => "et",
    Fi => "fi",
    Fil => "fil",
    Fr => "fr",
    FrCa => "fr-CA",
    Hr => "hr",
    Hu => "hu",
    Id => "id",
    It => "it",
    Ja => "ja",
    Lt => "lt",
    Lv => "lv",
    Ms => "ms",
    Mt => "mt",
    Nb => "nb",
    Nl => "nl",
    Pl => "pl",
    Pt => "pt",
    PtBr => "pt-BR",
    Ro => "ro",
    Ru => "ru",
    Sk => "sk",
    Sl => "sl",
    Sv => "sv",
    Th => "th",
    Tr => "tr",
    Zh => "zh",
    ZhHk => "zh-HK",
    ZhTw => "zh-TW",
}

impl CheckoutLocale {
    /// Case-sensitive membership test against the supported tokens.
    pub fn is_supported(token: &str) -> bool {
        token.parse::<CheckoutLocale>().is_ok()
    }

    /// `auto` lets the checkout page pick a language from the browser.
    pub fn is_auto(&self) -> bool {
        matches!(self, CheckoutLocale::Auto)
    }
}

impl fmt::Display for CheckoutLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn has_exactly_39_distinct_tokens() {
        assert_eq!(CheckoutLocale::ALL.len(), 39);
        let tokens: HashSet<&str> = CheckoutLocale::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(tokens.len(), 39);
    }

    #[test]
    fn tokens_match_the_published_list() {
        let expected = [
            "auto", "bg", "cs", "da", "de", "el", "en", "en-GB", "es", "es-419", "et", "fi", "fil",
            "fr", "fr-CA", "hr", "hu", "id", "it", "ja", "lt", "lv", "ms", "mt", "nb", "nl", "pl",
            "pt", "pt-BR", "ro", "ru", "sk", "sl", "sv", "th", "tr", "zh", "zh-HK", "zh-TW",
        ];
        assert_eq!(CheckoutLocale::ALL.map(|l| l.as_str()), expected);
    }

    #[test]
    fn every_token_parses_back_to_its_variant() {
        for locale in CheckoutLocale::ALL {
            assert_eq!(locale.as_str().parse::<CheckoutLocale>(), Ok(locale));
            assert_eq!(locale.to_string(), locale.as_str());
        }
    }

    #[test]
    fn membership() {
        assert!(CheckoutLocale::is_supported("fr-CA"));
        assert!(CheckoutLocale::is_supported("es-419"));
        assert!(!CheckoutLocale::is_supported("fr-FR"));
        assert!(!CheckoutLocale::is_supported("FR-ca"));
        assert!(!CheckoutLocale::is_supported(""));
    }

    #[test]
    fn unknown_token_reports_the_input() {
        assert_eq!(
            "en-US".parse::<CheckoutLocale>(),
            Err(CheckoutError::UnknownLocale("en-US".to_string()))
        );
    }

    #[test]
    fn defaults_to_auto() {
        assert!(CheckoutLocale::default().is_auto());
        assert!(!CheckoutLocale::ZhHk.is_auto());
    }

    #[test]
    fn serializes_as_bare_token() {
        assert_eq!(serde_json::to_string(&CheckoutLocale::PtBr).unwrap(), "\"pt-BR\"");
        let parsed: CheckoutLocale = serde_json::from_str("\"zh-TW\"").unwrap();
        assert_eq!(parsed, CheckoutLocale::ZhTw);
        assert!(serde_json::from_str::<CheckoutLocale>("\"fr-FR\"").is_err());
    }
}
