//! Remote minification
//!
//! Scripts go to a Closure Compiler style `/compile` endpoint, styles to a
//! `/css` endpoint taking the sheet in a single `file1` field. Both answer with
//! the minified text as the raw response body.

pub mod transport;

pub use transport::{HttpTransport, Transport, TransportResponse};

use crate::config::{BuildConfig, Endpoints};
use crate::error::BuildError;
use crate::models::{AssetKind, MinifiedPayload};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct RemoteMinifier<'a> {
    transport: &'a dyn Transport,
    endpoints: &'a Endpoints,
}

impl<'a> RemoteMinifier<'a> {
    pub fn new(transport: &'a dyn Transport, endpoints: &'a Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn compress_script(&self, source: &str) -> Result<MinifiedPayload> {
        let fields = [
            ("js_code", source),
            ("compilation_level", self.endpoints.compilation_level.as_str()),
            ("output_format", "text"),
            ("output_info", "compiled_code"),
        ];
        self.request(AssetKind::Script, &self.endpoints.script, &fields)
    }

    pub fn compress_style(&self, source: &str) -> Result<MinifiedPayload> {
        self.request(AssetKind::Style, &self.endpoints.style, &[("file1", source)])
    }

    fn request(
        &self,
        kind: AssetKind,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<MinifiedPayload> {
        log::debug!("POST {} ({} fields)", url, fields.len());
        let response = self
            .transport
            .post_form(url, fields)
            .with_context(|| format!("{} minification failed", kind))?;

        if !response.is_success() {
            return Err(BuildError::RemoteStatus {
                kind,
                url: url.to_string(),
                status: response.status,
            }
            .into());
        }

        let payload = MinifiedPayload::new(kind, response.body);
        if payload.is_empty() {
            return Err(BuildError::EmptyPayload {
                kind,
                url: url.to_string(),
            }
            .into());
        }

        Ok(payload)
    }
}

/// Read both canonical sources and minify them, script first.
/// Nothing is returned unless both calls succeed.
pub fn minify_sources(
    working_path: &Path,
    config: &BuildConfig,
    transport: &dyn Transport,
) -> Result<(MinifiedPayload, MinifiedPayload)> {
    let minifier = RemoteMinifier::new(transport, &config.endpoints);

    log::info!("Compressing {}", config.sources.script.display());
    let script = read_source(&working_path.join(&config.sources.script))?;
    let script = minifier.compress_script(&script)?;

    log::info!("Minifying {}", config.sources.style.display());
    let style = read_source(&working_path.join(&config.sources.style))?;
    let style = minifier.compress_style(&style)?;

    Ok((script, style))
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct Recorder {
        response: TransportResponse,
        calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl Recorder {
        fn answering(response: TransportResponse) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Recorder {
        fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<TransportResponse> {
            self.calls.borrow_mut().push((
                url.to_string(),
                fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));
            Ok(self.response.clone())
        }
    }

    fn owned(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_compress_script_sends_compiler_fields() {
        let endpoints = Endpoints::default();
        let transport = Recorder::answering(TransportResponse::ok("var a=1;"));
        let minifier = RemoteMinifier::new(&transport, &endpoints);

        let payload = minifier.compress_script("var a = 1;").unwrap();

        assert_eq!(payload, MinifiedPayload::new(AssetKind::Script, "var a=1;"));
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, crate::config::DEFAULT_SCRIPT_ENDPOINT);
        assert_eq!(
            calls[0].1,
            owned(&[
                ("js_code", "var a = 1;"),
                ("compilation_level", "SIMPLE_OPTIMIZATIONS"),
                ("output_format", "text"),
                ("output_info", "compiled_code"),
            ])
        );
    }

    #[test]
    fn test_compress_style_sends_single_field() {
        let endpoints = Endpoints::default();
        let transport = Recorder::answering(TransportResponse::ok("a{color:red}"));
        let minifier = RemoteMinifier::new(&transport, &endpoints);

        let payload = minifier.compress_style("a { color: red; }").unwrap();

        assert_eq!(payload.content, "a{color:red}");
        let calls = transport.calls.borrow();
        assert_eq!(calls[0].0, crate::config::DEFAULT_STYLE_ENDPOINT);
        assert_eq!(calls[0].1, owned(&[("file1", "a { color: red; }")]));
    }

    #[test]
    fn test_body_is_kept_verbatim() {
        let endpoints = Endpoints::default();
        let transport = Recorder::answering(TransportResponse::ok("var a=1;\n"));
        let minifier = RemoteMinifier::new(&transport, &endpoints);

        assert_eq!(minifier.compress_script("var a = 1;").unwrap().content, "var a=1;\n");
    }

    #[test]
    fn test_error_status_is_rejected() {
        let endpoints = Endpoints::default();
        let transport = Recorder::answering(TransportResponse {
            status: 500,
            body: "oops".to_string(),
        });
        let minifier = RemoteMinifier::new(&transport, &endpoints);

        let err = minifier.compress_style("a{}").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::RemoteStatus { status: 500, .. })
        ));
    }

    #[test]
    fn test_empty_body_is_rejected() {
        let endpoints = Endpoints::default();
        let transport = Recorder::answering(TransportResponse::ok("\n"));
        let minifier = RemoteMinifier::new(&transport, &endpoints);

        let err = minifier.compress_script("syntax error(").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::EmptyPayload {
                kind: AssetKind::Script,
                ..
            })
        ));
    }
}
