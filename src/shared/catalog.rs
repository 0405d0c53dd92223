//! Catalog DTOs
//!
//! Wire shapes for the `/api/authors` and `/api/books` resources. Each
//! resource has three variants:
//!
//! - the read DTO returned by the API (always carries the id)
//! - the create DTO accepted by `POST` (never carries an id)
//! - the update DTO accepted by `PUT` (carries the id that must match the path)
//!
//! JSON field names are camelCase. Missing string fields deserialize to an
//! empty string so that `{}` reaches validation and is rejected there.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Author as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub bio: Option<String>,
}

/// Body of `POST /api/authors`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCreateDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Name is required (max 50 characters)"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Last name is required (max 50 characters)"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 250, message = "Bio is limited to 250 characters"))]
    pub bio: Option<String>,
}

/// Body of `PUT /api/authors/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorUpdateDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Name is required (max 50 characters)"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Last name is required (max 50 characters)"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 250, message = "Bio is limited to 250 characters"))]
    pub bio: Option<String>,
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub isbn: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub author_id: Option<i32>,
}

/// Body of `POST /api/books`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookCreateDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "Title is required (max 150 characters)"))]
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Isbn is required (max 50 characters)"))]
    pub isbn: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Summary is limited to 500 characters"))]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[serde(default)]
    #[validate(required(message = "Author is required"), range(min = 1, message = "Author id must be positive"))]
    pub author_id: Option<i32>,
}

/// Body of `PUT /api/books/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdateDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "Title is required (max 150 characters)"))]
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Isbn is required (max 50 characters)"))]
    pub isbn: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Summary is limited to 500 characters"))]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[serde(default)]
    #[validate(required(message = "Author is required"), range(min = 1, message = "Author id must be positive"))]
    pub author_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_author_body_fails_validation() {
        let dto: AuthorCreateDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto, AuthorCreateDto::default());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_author_create_accepts_camel_case() {
        let dto: AuthorCreateDto =
            serde_json::from_str(r#"{"name":"A","lastName":"B"}"#).unwrap();
        assert_eq!(dto.name, "A");
        assert_eq!(dto.last_name, "B");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_author_bio_length_limit() {
        let dto = AuthorCreateDto {
            name: "Ursula".to_string(),
            last_name: "Le Guin".to_string(),
            bio: Some("x".repeat(251)),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_book_requires_author() {
        let dto = BookCreateDto {
            title: "Dune".to_string(),
            isbn: "978-0441013593".to_string(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().keys().any(|k| k.to_string() == "author_id"));
    }

    #[test]
    fn test_book_update_without_id_defaults_to_zero() {
        let dto: BookUpdateDto =
            serde_json::from_str(r#"{"title":"Dune","isbn":"1","authorId":1}"#).unwrap();
        assert_eq!(dto.id, 0);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_book_dto_serializes_camel_case() {
        let dto = BookDto {
            id: 3,
            title: "Dune".to_string(),
            year: Some(1965),
            isbn: "978-0441013593".to_string(),
            summary: None,
            image: None,
            price: Some(9.99),
            author_id: Some(1),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["authorId"], 1);
        assert_eq!(json["year"], 1965);
    }
}
