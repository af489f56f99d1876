#![forbid(unsafe_code)]

//! Resolve secret-typed fields of a configuration struct from a pluggable
//! secret store.
//!
//! A configuration registers its secret fields through [`Configuration`];
//! [`process`] then fetches each field's raw bag from a [`Store`], narrows it
//! by the field's allow-list and hands it to the field's [`Secret::decode`].

pub mod allow_list;
pub mod cache;
pub mod config;
pub mod error;
pub mod process;
pub mod secret;
pub mod store;

pub use crate::allow_list::AllowList;
pub use crate::cache::{Lookup, RetrievalCache};
pub use crate::config::{Configuration, FieldOptions, Fields, SecretField};
pub use crate::error::{DecodeError, ErrorKind, ResolveError, StoreError};
pub use crate::process::{must_process, process};
pub use crate::secret::{
    Base, KeyOverride, LoginSecret, MapSecret, PrivateKeySecret, PublicKeySecret, Secret,
    SecretBag, StringSecret,
};
pub use crate::store::Store;
