//! About Us Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use medovik_app::domain::about::records::{AboutFeature, AboutRecord};

/// A bullet on the About Us page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AboutFeatureBody {
    pub text: String,

    /// Front-end icon name, e.g. `FaLeaf`
    pub icon: String,
}

/// About Us content, used for both reads and full replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AboutBody {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<AboutFeatureBody>,
}

impl From<AboutRecord> for AboutBody {
    fn from(about: AboutRecord) -> Self {
        AboutBody {
            title: about.title,
            description: about.description,
            features: about
                .features
                .into_iter()
                .map(|feature| AboutFeatureBody {
                    text: feature.text,
                    icon: feature.icon,
                })
                .collect(),
        }
    }
}

impl From<AboutBody> for AboutRecord {
    fn from(body: AboutBody) -> Self {
        AboutRecord {
            title: body.title,
            description: body.description,
            features: body
                .features
                .into_iter()
                .map(|feature| AboutFeature {
                    text: feature.text,
                    icon: feature.icon,
                })
                .collect(),
        }
    }
}
