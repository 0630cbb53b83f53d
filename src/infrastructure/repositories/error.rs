use crate::domain::errors::DomainError;

const CNT_PAGE_SLUG: &str = "pages_slug_key";
const CNT_PAGE_SLUG_FORMAT: &str = "pages_slug_format_chk";
const CNT_LINK_PAGE: &str = "links_page_id_fkey";

/// Unique violations are not mapped here; the only reachable one is the page
/// slug, which `map_page_insert` turns into `SlugConflict`.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_LINK_PAGE => DomainError::NotFound("page not found".into()),
                    CNT_PAGE_SLUG_FORMAT => {
                        DomainError::Validation("slug is not in normalized form".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Map an insert into `pages`. The slug unique constraint is the authority on
/// slug ownership, so its violation becomes the same `SlugConflict` the
/// pre-insert check would have produced.
pub fn map_page_insert(err: sqlx::Error, slug: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation()
            && db_err.constraint().is_none_or(|name| name == CNT_PAGE_SLUG)
        {
            return DomainError::SlugConflict(slug.to_owned());
        }
    }
    map_sqlx(err)
}
