//! Request and response shapes of the ETS API.
//!
//! Request types serialise with the PascalCase field names the server expects.
//! Response types read camelCase keys (see [`crate::envelope::normalize_keys`])
//! and default every field, so a sparse payload still decodes.

pub mod dispatch;
pub mod invoice;
mod lenient;
pub mod party;
pub mod producer;
pub mod responses;

pub use dispatch::{Dispatch, DispatchRequest};
pub use invoice::{
    ArchiveInfo, Invoice, InvoiceListQuery, InvoiceRequest, RespondRequest, ResponseType,
    SendingType,
};
pub use party::{
    Address, DocumentLine, LegalMonetaryTotal, Party, Person, TargetCustomer, Tax,
};
pub use producer::{ProducerReceipt, ProducerReceiptRequest, Voucher, VoucherRequest};
pub use responses::{
    CancelResult, DocumentStatus, ExchangeRate, InvoiceListItem, InvoiceResult, PdfResult,
    UserAlias, UserAliasResult, UserCheckResult,
};
