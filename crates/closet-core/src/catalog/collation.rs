//! Locale-aware string ordering for catalog labels.
//!
//! Labels are compared with the Unicode Collation Algorithm at the root
//! locale, so accents and case only matter once the base letters tie:
//! `"acme" < "Acme" < "Banana"` and `"Équipement" < "Sézane" < "Sunspel"`.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

/// Root locale (`und`), tertiary strength.
fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "root collator unavailable; falling back to code point order");
            None
        }
    }
}

pub fn compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
