//! About Us Records

use serde::{Deserialize, Serialize};

/// Key of the single About Us row.
pub(crate) const ABOUT_KEY: &str = "about_us";

/// One bullet on the About Us page. `icon` names a front-end icon such as `FaLeaf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutFeature {
    pub text: String,
    pub icon: String,
}

/// About Us Record
#[derive(Debug, Clone, PartialEq)]
pub struct AboutRecord {
    pub title: String,
    pub description: String,
    pub features: Vec<AboutFeature>,
}

impl Default for AboutRecord {
    /// Content shown until an administrator writes their own.
    fn default() -> Self {
        let feature = |text: &str, icon: &str| AboutFeature {
            text: text.to_string(),
            icon: icon.to_string(),
        };

        Self {
            title: "О нас".to_string(),
            description: "Мы семейная пасека «Медовик»: мёд и продукты пчеловодства собираем \
                          и готовим вручную. Мы заботимся о пчёлах, работаем в \
                          экологически чистых районах и доставляем натуральные продукты \
                          прямо к вашему столу."
                .to_string(),
            features: vec![
                feature("100% натуральные продукты без добавок", "FaLeaf"),
                feature("Собственная пасека в экологически чистом районе", "FaCertificate"),
                feature("Бережная доставка по всей стране", "FaTruck"),
                feature("Сделано с любовью и заботой о здоровье", "FaHeart"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_has_four_iconed_features() {
        let about = AboutRecord::default();

        assert_eq!(about.features.len(), 4);
        assert!(
            about.features.iter().all(|f| f.icon.starts_with("Fa")),
            "every default feature should name an icon"
        );
    }
}
