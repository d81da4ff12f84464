//! Various shared functions used by the cycling core.
pub mod eligibility;
pub mod modmask_lookup;
pub mod xkeysym_lookup;
