// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations for `en-US` and `pt-BR` are embedded in the binary; extra
//! `.ftl` files can be loaded from a directory given with `--i18n-dir`.
//! The locale is picked from the CLI, then the config, then the system.

pub mod fluent;
