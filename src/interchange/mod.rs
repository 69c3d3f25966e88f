//! `.ttldb` interchange: record validation and conversion to/from the stores.

pub mod codec;
pub mod validate;

pub use codec::{
    StoreTarget, decode_records, encode_records, external_month, from_interchange,
    internal_month, to_interchange,
};
pub use validate::{is_valid_record, valid_entry, validated_record};
