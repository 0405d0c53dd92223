//! Entity ⇄ DTO mapping
//!
//! Explicit field copies between persisted entities and wire DTOs. Every
//! conversion destructures its source completely, so adding a field to an
//! entity or DTO fails to compile until the mapping is updated.
//!
//! | Entity | DTO | Direction |
//! |---|---|---|
//! | `Author` | `AuthorDto` | both |
//! | `Author` | `AuthorCreateDto` | both |
//! | `Author` | `AuthorUpdateDto` | both |
//! | `Book` | `BookDto` | both |
//! | `Book` | `BookCreateDto` | both |
//! | `Book` | `BookUpdateDto` | both |
//!
//! Create DTOs carry no id; mapping one to an entity yields id `0`, which
//! the store replaces on insert.

use crate::backend::authors::Author;
use crate::backend::books::Book;
use crate::shared::{
    AuthorCreateDto, AuthorDto, AuthorUpdateDto, BookCreateDto, BookDto, BookUpdateDto,
};

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        let Author {
            id,
            name,
            last_name,
            bio,
        } = author;
        Self {
            id,
            name,
            last_name,
            bio,
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        let AuthorDto {
            id,
            name,
            last_name,
            bio,
        } = dto;
        Self {
            id,
            name,
            last_name,
            bio,
        }
    }
}

impl From<AuthorCreateDto> for Author {
    fn from(dto: AuthorCreateDto) -> Self {
        let AuthorCreateDto {
            name,
            last_name,
            bio,
        } = dto;
        Self {
            id: 0,
            name,
            last_name,
            bio,
        }
    }
}

impl From<Author> for AuthorCreateDto {
    fn from(author: Author) -> Self {
        let Author {
            id: _,
            name,
            last_name,
            bio,
        } = author;
        Self {
            name,
            last_name,
            bio,
        }
    }
}

impl From<AuthorUpdateDto> for Author {
    fn from(dto: AuthorUpdateDto) -> Self {
        let AuthorUpdateDto {
            id,
            name,
            last_name,
            bio,
        } = dto;
        Self {
            id,
            name,
            last_name,
            bio,
        }
    }
}

impl From<Author> for AuthorUpdateDto {
    fn from(author: Author) -> Self {
        let Author {
            id,
            name,
            last_name,
            bio,
        } = author;
        Self {
            id,
            name,
            last_name,
            bio,
        }
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        let Book {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        } = book;
        Self {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        }
    }
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        let BookDto {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        } = dto;
        Self {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        }
    }
}

impl From<BookCreateDto> for Book {
    fn from(dto: BookCreateDto) -> Self {
        let BookCreateDto {
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        } = dto;
        Self {
            id: 0,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        }
    }
}

impl From<Book> for BookCreateDto {
    fn from(book: Book) -> Self {
        let Book {
            id: _,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        } = book;
        Self {
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        }
    }
}

impl From<BookUpdateDto> for Book {
    fn from(dto: BookUpdateDto) -> Self {
        let BookUpdateDto {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        } = dto;
        Self {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        }
    }
}

impl From<Book> for BookUpdateDto {
    fn from(book: Book) -> Self {
        let Book {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        } = book;
        Self {
            id,
            title,
            year,
            isbn,
            summary,
            image,
            price,
            author_id,
        }
    }
}
