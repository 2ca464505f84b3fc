//! One `impl EtsClient` block per document family. Each operation is a fixed
//! path plus a payload shape over [`EtsClient::get`] or [`EtsClient::post`].

pub mod currency;
pub mod dispatch;
pub mod earchive;
pub mod invoice;
pub mod producer;
pub mod voucher;

/// Percent-encode a caller-supplied path segment (party id, document UUID).
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
