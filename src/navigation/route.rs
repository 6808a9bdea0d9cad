use url::Url;

use crate::error::RouteError;

pub const QUIZ_PATH: &str = "/";
pub const RESULTS_PATH: &str = "/result";
/// Query parameter carrying the serialized answers.
pub const ANSWERS_PARAM: &str = "ans";

/// Origin used to resolve relative navigation targets.
const LOCAL_ORIGIN: &str = "http://localhost/";

/// A screen the application can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Quiz,
    /// Results screen; `answers` is the raw, already unescaped payload.
    Results { answers: Option<String> },
}

impl Route {
    /// Parse a navigation target such as `/` or `/result?ans=%5B...%5D`.
    pub fn parse(target: &str) -> Result<Self, RouteError> {
        let url = Url::parse(LOCAL_ORIGIN)
            .and_then(|base| base.join(target.trim()))
            .map_err(|_| RouteError::Malformed {
                target: target.to_string(),
            })?;

        match url.path().trim_end_matches('/') {
            "" => Ok(Route::Quiz),
            path if path == RESULTS_PATH => {
                let answers = url
                    .query_pairs()
                    .find(|(key, _)| key == ANSWERS_PARAM)
                    .map(|(_, value)| value.into_owned());
                Ok(Route::Results { answers })
            }
            path => Err(RouteError::UnknownPath {
                path: path.to_string(),
            }),
        }
    }

    pub fn to_url(&self) -> String {
        match self {
            Route::Quiz => QUIZ_PATH.to_string(),
            Route::Results {
                answers: Some(answers),
            } => format!(
                "{}?{}={}",
                RESULTS_PATH,
                ANSWERS_PARAM,
                urlencoding::encode(answers)
            ),
            Route::Results { answers: None } => RESULTS_PATH.to_string(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_url())
    }
}
