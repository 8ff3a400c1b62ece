//! Wire DTOs and their domain conversions.
//!
//! The backend renders decimals (prices, ratings) either as JSON numbers or
//! as strings depending on the serializer; the deserializers here accept
//! both. Unknown response fields are ignored throughout.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use bookstall_cart::{CartItem, CartSnapshot};
use bookstall_catalog::{Book, BookFormat, Category};
use bookstall_core::{BookId, CartItemId, CategoryId, OrderId, OrderItemId, RemoteError, UserId};
use bookstall_orders::{Order, OrderItem, OrderStatus};
use bookstall_session::UserProfile;

// -------------------------
// Decimal handling
// -------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Num(f64),
    Text(String),
}

impl RawDecimal {
    fn value<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            RawDecimal::Num(n) => Ok(n),
            RawDecimal::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal string: {s:?}"))),
        }
    }
}

fn de_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    RawDecimal::deserialize(deserializer)?.value()
}

fn de_opt_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<RawDecimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => raw.value().map(Some),
    }
}

fn decode_error(context: &str, detail: impl core::fmt::Display) -> RemoteError {
    RemoteError::Decode(format!("{context}: {detail}"))
}

// -------------------------
// Catalog
// -------------------------

#[derive(Debug, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub price: Option<f64>,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub category: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub format: Option<BookFormat>,
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Book {
            id: BookId::new(dto.id),
            title: dto.title,
            author: dto.author,
            isbn: dto.isbn,
            description: dto.description,
            price: dto.price,
            cover_image: dto.cover_image,
            category: CategoryId::new(dto.category),
            category_name: dto.category_name,
            publisher: dto.publisher,
            publication_date: dto.publication_date,
            language: dto.language.unwrap_or_else(|| "English".to_string()),
            pages: dto.pages,
            stock: dto.stock,
            rating: dto.rating,
            format: dto.format.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: CategoryId::new(dto.id),
            name: dto.name,
        }
    }
}

// -------------------------
// Cart
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CartItemDto {
    pub id: i64,
    pub book: BookDto,
    pub quantity: u32,
}

impl TryFrom<CartItemDto> for CartItem {
    type Error = RemoteError;

    fn try_from(dto: CartItemDto) -> Result<Self, Self::Error> {
        CartItem::new(CartItemId::new(dto.id), dto.book.into(), dto.quantity)
            .map_err(|e| decode_error("cart item", e))
    }
}

/// `GET /cart/cart/` response. The server also sends `id`, `user` and
/// `total_price`; the snapshot is rebuilt from the items alone.
#[derive(Debug, Deserialize)]
pub struct CartDto {
    #[serde(default)]
    pub items: Vec<CartItemDto>,
}

impl TryFrom<CartDto> for CartSnapshot {
    type Error = RemoteError;

    fn try_from(dto: CartDto) -> Result<Self, Self::Error> {
        let items = dto
            .items
            .into_iter()
            .map(CartItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CartSnapshot::from_items(items))
    }
}

#[derive(Debug, Serialize)]
pub struct AddItemRequest {
    pub book_id: BookId,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct UpdateItemRequest {
    pub quantity: u32,
}

// -------------------------
// Orders
// -------------------------

#[derive(Debug, Deserialize)]
pub struct OrderItemDto {
    pub id: i64,
    pub book: BookDto,
    pub quantity: u32,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OrderDto {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "de_decimal")]
    pub total_price: f64,
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
}

impl TryFrom<OrderDto> for Order {
    type Error = RemoteError;

    fn try_from(dto: OrderDto) -> Result<Self, Self::Error> {
        let status: OrderStatus = dto
            .status
            .parse()
            .map_err(|e| decode_error("order status", e))?;

        let items = dto
            .items
            .into_iter()
            .map(|item| OrderItem {
                id: OrderItemId::new(item.id),
                book: item.book.into(),
                quantity: item.quantity,
                price: item.price.unwrap_or(0.0),
            })
            .collect();

        Ok(Order {
            id: OrderId::new(dto.id),
            user: dto.user.map(UserId::new),
            created_at: dto.created_at,
            total_price: dto.total_price,
            status,
            items,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// -------------------------
// Accounts
// -------------------------

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct TokensDto {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponseDto {
    pub tokens: TokensDto,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct VerifyResponseDto {
    pub valid: bool,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
    pub is_staff: bool,
}

#[derive(Debug, Serialize)]
pub struct LogoutRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub struct PasswordResetRequestBody {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct OtpResponseDto {
    pub otp: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct PasswordResetConfirmBody {
    pub email: String,
    pub otp: String,
    pub token: String,
    pub password: String,
}
