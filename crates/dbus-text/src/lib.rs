#![cfg_attr(not(feature = "std"), no_std)]
#![doc = "Validated D-Bus identifiers and the bus address string format."]
#![doc = ""]
#![doc = "- `names`: object paths, interface names and member names."]
#![doc = "- `signature`: type signatures and the complete types they denote."]
#![doc = "- `address`: `method:key=value,...;...` address lists with percent-escapes."]
#![doc = "- `env` (feature `std`): default addresses from the process environment."]

// 'alloc' is used for the String/Vec/BTreeMap backed values.
extern crate alloc;

// --- Identifiers ---
pub mod names;
pub mod signature;

// --- Addresses ---
pub mod address;

#[cfg(feature = "std")]
pub mod env;

// --- Top-level Exports ---
pub use address::{Address, AddressError, decode_many, decode_one, encode_many, encode_one};
pub use names::{InterfaceName, MemberName, NameError, ObjectPath};
pub use signature::{Signature, Type};
