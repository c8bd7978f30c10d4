//! # spellnum
//!
//! Spells integer literals as English long-form names.
//!
//! The work is a pull-based pipeline of iterators, one stage per concern:
//!
//!     tokens (stdin lines or arguments)
//!       -> integers (arbitrary precision, invalid tokens skipped)
//!       -> chunks (base-1000 groups, most significant first)
//!       -> words ("one thousand, two hundred thirty four")
//!
//! See the [spell] module for the stages and the runner that drives them.

pub mod spell;
