//! Type color listing service.

use crate::cache::CacheStatus;
use crate::context::{Context, TypesCache};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Category, TypeColor, TypeColorList};

const TYPES_CACHE_KEY: &str = "types";

/// Service for the static type color table.
#[derive(FromContext, Clone)]
pub struct ColorService {
    cache: TypesCache,
}

impl ColorService {
    /// Every type with its color and text color, in table order.
    pub fn list_types(&self) -> (TypeColorList, CacheStatus) {
        if let Some(cached) = self.cache.get(TYPES_CACHE_KEY) {
            return (cached, CacheStatus::Hit);
        }

        let types: Vec<TypeColor> = Category::all().iter().map(type_color).collect();
        let list = TypeColorList {
            count: types.len(),
            types,
        };

        self.cache.put(TYPES_CACHE_KEY, list.clone());
        (list, CacheStatus::Miss)
    }

    /// A single type's colors.
    pub fn get_type(&self, name: &str) -> Result<TypeColor, AppError> {
        Category::lookup(name)
            .map(|category| type_color(&category))
            .ok_or_else(|| AppError::TypeNotFound(name.to_string()))
    }

    pub fn max_age_secs(&self) -> u64 {
        self.cache.ttl().as_secs()
    }
}

fn type_color(category: &Category) -> TypeColor {
    TypeColor {
        kind: category.name().to_string(),
        color: category.color().into(),
        text_color: category.text_color().to_hex(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::di::FromRef;
    use crate::repositories::PokemonSource;

    struct NoSource;

    #[async_trait::async_trait]
    impl PokemonSource for NoSource {
        async fn fetch(&self, id: &str) -> Result<crate::models::Pokemon, AppError> {
            Err(AppError::InvalidId(id.to_string()))
        }
    }

    fn service() -> ColorService {
        let ctx = Context::with_source(Config::default(), std::sync::Arc::new(NoSource));
        ColorService::from_ref(&ctx)
    }

    #[test]
    fn test_list_types_miss_then_hit() {
        let service = service();

        let (list, status) = service.list_types();
        assert_eq!(status, CacheStatus::Miss);
        assert_eq!(list.count, 18);
        assert_eq!(list.types[0].kind, "bug");
        assert_eq!(list.types[0].color.hex, "#A7B723");
        assert_eq!(list.types[0].text_color, "#3B4000");

        let (again, status) = service.list_types();
        assert_eq!(status, CacheStatus::Hit);
        assert_eq!(again.count, 18);
    }

    #[test]
    fn test_get_type() {
        let fire = service().get_type("fire").unwrap();
        assert_eq!(fire.color.hex, "#F57D31");
        assert_eq!(fire.color.rgb, "rgb(245, 125, 49)");
        assert_eq!(fire.text_color, "#702E08");
    }

    #[test]
    fn test_get_unknown_type() {
        let err = service().get_type("shadow").unwrap_err();
        assert!(matches!(err, AppError::TypeNotFound(name) if name == "shadow"));
    }

    #[test]
    fn test_get_type_requires_lowercase() {
        let err = service().get_type("FIRE").unwrap_err();
        assert!(matches!(err, AppError::TypeNotFound(_)));
    }
}
