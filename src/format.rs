//! Number formatting for user-facing text.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format a monetary amount with thousands separators and no cents,
/// e.g. `1234.56` becomes `"1,235"`.
///
/// Used for amounts embedded in optimization tips, where cents are noise.
pub fn format_amount(amount: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::default()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    fmt.fmt_string(amount)
}
