#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use seq_format as format;
pub use seq_reflect as reflect;

pub use seq_reflect::{
    Format, MissingPolicy, ReadOptions, Schema, from_format, from_format_with, to_format,
};
