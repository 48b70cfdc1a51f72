//! Lookup command implementation

use super::report;
use crate::adapters::http::{Headers, ReqwestTransport};
use crate::config::ZipAddrConfig;
use crate::core::fetch::AddressClient;
use crate::domain::{FormattedAddress, ZipCode};
use clap::Args;
use reqwest::header::{HeaderName, HeaderValue};

/// Arguments for an address lookup
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Zip code to look up
    pub zipcode: String,

    /// Include the kana rendering of the address
    #[arg(long, overrides_with = "no_include_kana")]
    pub include_kana: bool,

    /// Omit the kana rendering of the address
    #[arg(long, overrides_with = "include_kana")]
    pub no_include_kana: bool,

    /// Override the lookup service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Extra request header, as NAME=VALUE (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl LookupArgs {
    /// Resolve the kana flag against the configured default
    pub fn include_kana(&self, default: bool) -> bool {
        if self.include_kana {
            true
        } else if self.no_include_kana {
            false
        } else {
            default
        }
    }

    /// Apply command-line overrides to the loaded configuration
    pub fn apply_overrides(&self, config: &mut ZipAddrConfig) {
        if let Some(ref base_url) = self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
        if self.compact {
            config.output.pretty = false;
        }
    }

    /// Per-request headers given on the command line
    pub fn request_headers(&self) -> Option<Headers> {
        if self.headers.is_empty() {
            return None;
        }
        Some(self.headers.iter().cloned().collect())
    }

    /// Execute the lookup
    pub async fn execute(&self, config: &ZipAddrConfig) -> anyhow::Result<i32> {
        let zipcode = ZipCode::new(self.zipcode.trim());
        let include_kana = self.include_kana(config.output.include_kana);

        tracing::info!(
            zipcode = %zipcode,
            include_kana = include_kana,
            base_url = %config.api.base_url,
            "Looking up address"
        );

        let transport = ReqwestTransport::new(&config.api)?;
        let client = AddressClient::new(transport, &config.api.base_url);
        let headers = self.request_headers();

        match client
            .fetch_and_format_address(&zipcode, include_kana, headers.as_ref())
            .await
        {
            Ok(address) => {
                println!("{}", render(&address, config.output.pretty)?);
                Ok(report::EXIT_SUCCESS)
            }
            Err(e) => {
                crate::log_lookup_failure!(&zipcode, &e);
                eprintln!("{}", report::describe(&e));
                Ok(report::exit_code(e.kind))
            }
        }
    }
}

fn render(address: &FormattedAddress, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        address.to_pretty_json()
    } else {
        address.to_compact_json()
    }
}

/// Parse a NAME=VALUE header argument
fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header name is empty in '{raw}'"));
    }
    let value = value.trim();

    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| format!("invalid header name '{name}': {e}"))?;
    HeaderValue::from_str(value).map_err(|e| format!("invalid value for header '{name}': {e}"))?;

    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Api-Key=secret").unwrap(),
            ("X-Api-Key".to_string(), "secret".to_string())
        );
        assert_eq!(
            parse_header("X-Empty=").unwrap(),
            ("X-Empty".to_string(), String::new())
        );
        assert!(parse_header("no-separator").is_err());
        assert!(parse_header("=value").is_err());
    }

    #[test]
    fn test_parse_header_rejects_invalid_http_tokens() {
        let err = parse_header("X Bad=1").unwrap_err();
        assert!(err.contains("invalid header name 'X Bad'"));

        let err = parse_header("X-Trace=line\u{7f}break").unwrap_err();
        assert!(err.contains("invalid value for header 'X-Trace'"));
    }

    #[test]
    fn test_render_compact_and_pretty() {
        let address = FormattedAddress {
            zipcode: "1000001".to_string(),
            full_address: "東京都千代田区千代田".to_string(),
            prefecture: "東京都".to_string(),
            city: "千代田区".to_string(),
            town: "千代田".to_string(),
            full_address_kana: None,
        };

        assert!(!render(&address, false).unwrap().contains('\n'));
        assert!(render(&address, true).unwrap().contains('\n'));
    }
}
