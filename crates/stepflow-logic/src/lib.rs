//! Pure game rules for StepFlow.
//!
//! This crate contains the parts of the ordering-puzzle game that are
//! independent of any engine, UI, or clock. Functions take plain data (and an
//! injected RNG where randomness is involved) and return results, making
//! them unit-testable and portable across native and WASM hosts.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`arrangement`] | Unarranged/arranged step buffers and the move primitive |
//! | [`catalog`] | Domain → Stage → Puzzle → Step content model and validation |
//! | [`countdown`] | Tick-driven per-puzzle countdown |
//! | [`levels`] | Level → required stage count, stage index ranges |
//! | [`scoring`] | Flat award, clamped penalty, optional time bonus |
//! | [`selector`] | Non-repeating random puzzle selection for a level |
//! | [`validator`] | All-or-nothing order check |

pub mod arrangement;
pub mod catalog;
pub mod countdown;
pub mod levels;
pub mod scoring;
pub mod selector;
pub mod validator;
