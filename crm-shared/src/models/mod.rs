//! Wire models exchanged with the CRM backend.

pub mod auth;
pub mod directory;
pub mod documents;
pub mod errors;
pub mod notifications;
pub mod pagination;
pub mod products;
pub mod settings;
pub mod stats;
pub mod timestamp;
pub mod upload;
pub mod user;

pub use auth::{
    AuthResponse, ChangePasswordRequest, GoogleLoginRequest, LoginRequest, MeResponse,
    MessageResponse, SignupRequest,
};
pub use directory::{AccountInput, AccountUpdate, UserListResponse};
pub use documents::{
    BulkDeleteRequest, BulkDocumentsRequest, Document, DocumentInput, DocumentListResponse,
};
pub use errors::{ErrorResponse, GENERIC_ERROR_MESSAGE};
pub use notifications::{Notification, NotificationPage};
pub use pagination::{PageSlice, Pagination, paginate};
pub use products::{Product, ProductInput, ProductListResponse, SelectProductRequest};
pub use settings::Settings;
pub use stats::{
    DashboardQuery, DashboardStats, DashboardTotals, DeviceShare, DeviceStats, RangeType,
    SaleRecord, SalesPoint, SalesSummary,
};
pub use timestamp::Timestamp;
pub use upload::UploadResponse;
pub use user::{ProfileUpdate, UserProfile, UserRole};
