/// Locale-aware currency formatting
///
/// The host locale is read from the POSIX environment variables and mapped
/// to a small table of currency styles. Unknown locales use US dollars.

/// Supported host locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    EnCa,
    EnAu,
    FrFr,
    FrCa,
    DeDe,
    EsEs,
    ItIt,
    JaJp,
}

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    /// "$12.00"
    Prefix,
    /// "12,00 €" (separated by a no-break space)
    Suffix,
}

/// Formatting rules for one locale's currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CurrencyStyle {
    symbol: &'static str,
    placement: SymbolPlacement,
    grouping: char,
    decimal: char,
    fraction_digits: usize,
}

const NO_BREAK_SPACE: char = '\u{a0}';
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// Environment variables consulted for the monetary locale, highest priority first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

impl Locale {
    /// Parse a POSIX or BCP 47 style locale tag
    ///
    /// Accepts forms like `en_US`, `en-US`, `fr_FR.UTF-8@euro` and bare
    /// languages like `de`. Returns `None` for `C`, `POSIX` and anything
    /// not in the table.
    pub fn from_tag(tag: &str) -> Option<Self> {
        // Drop encoding and modifier
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let base = base.replace('-', "_");

        let mut parts = base.splitn(2, '_');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let territory = parts.next().map(|t| t.to_ascii_uppercase());

        match (language.as_str(), territory.as_deref()) {
            ("en", Some("US")) | ("en", None) => Some(Locale::EnUs),
            ("en", Some("GB")) => Some(Locale::EnGb),
            ("en", Some("CA")) => Some(Locale::EnCa),
            ("en", Some("AU")) => Some(Locale::EnAu),
            ("fr", Some("FR")) | ("fr", None) => Some(Locale::FrFr),
            ("fr", Some("CA")) => Some(Locale::FrCa),
            ("de", Some("DE")) | ("de", None) => Some(Locale::DeDe),
            ("es", Some("ES")) | ("es", None) => Some(Locale::EsEs),
            ("it", Some("IT")) | ("it", None) => Some(Locale::ItIt),
            ("ja", Some("JP")) | ("ja", None) => Some(Locale::JaJp),
            _ => None,
        }
    }

    /// Resolve the host's monetary locale from the process environment
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve a locale from an arbitrary variable lookup
    ///
    /// The first non-empty variable decides, even if its value is not a
    /// known locale.
    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tag = LOCALE_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.is_empty());

        match tag {
            Some(tag) => Self::from_tag(&tag).unwrap_or_else(|| {
                tracing::debug!(%tag, "unknown locale, formatting currency as en_US");
                Locale::EnUs
            }),
            None => Locale::EnUs,
        }
    }

    fn style(self) -> CurrencyStyle {
        let prefix = |symbol| CurrencyStyle {
            symbol,
            placement: SymbolPlacement::Prefix,
            grouping: ',',
            decimal: '.',
            fraction_digits: 2,
        };
        let euro = |grouping| CurrencyStyle {
            symbol: "€",
            placement: SymbolPlacement::Suffix,
            grouping,
            decimal: ',',
            fraction_digits: 2,
        };

        match self {
            Locale::EnUs | Locale::EnCa | Locale::EnAu => prefix("$"),
            Locale::EnGb => prefix("£"),
            Locale::JaJp => CurrencyStyle {
                fraction_digits: 0,
                ..prefix("￥")
            },
            Locale::FrFr => euro(NARROW_NO_BREAK_SPACE),
            Locale::DeDe | Locale::EsEs | Locale::ItIt => euro('.'),
            Locale::FrCa => CurrencyStyle {
                symbol: "$",
                ..euro(NO_BREAK_SPACE)
            },
        }
    }
}

/// Formats numbers as currency strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
    style: CurrencyStyle,
}

impl CurrencyFormatter {
    /// Formatter for the host locale
    pub fn from_env() -> Self {
        Self::for_locale(Locale::from_env())
    }

    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            style: locale.style(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format a value, e.g. `15.0` -> `"$15.00"` in en_US
    ///
    /// Rounds half-to-even at the locale's fraction digits. A value that
    /// rounds to zero is shown without a minus sign.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        let (body, is_zero) = if value.is_infinite() {
            ("∞".to_string(), false)
        } else {
            let fixed = format!("{:.*}", self.style.fraction_digits, value.abs());
            let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
            (self.localize_digits(&fixed), is_zero)
        };

        let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

        match self.style.placement {
            SymbolPlacement::Prefix => format!("{}{}{}", sign, self.style.symbol, body),
            SymbolPlacement::Suffix => {
                format!("{}{}{}{}", sign, body, NO_BREAK_SPACE, self.style.symbol)
            }
        }
    }

    /// Insert grouping separators and swap in the locale's decimal mark
    fn localize_digits(&self, fixed: &str) -> String {
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed, None),
        };

        let mut out = String::with_capacity(fixed.len() + integer.len() / 3 * 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(self.style.grouping);
            }
            out.push(digit);
        }

        if let Some(fraction) = fraction {
            out.push(self.style.decimal);
            out.push_str(fraction);
        }

        out
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
