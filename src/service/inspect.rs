use crate::models::config::Config;
use crate::models::edit_backup::EditBackupRequest;
use crate::models::error::{EditBackupError, Result};
use crate::service::codec::{decode_payload, encode};
use crate::utils::directory::get_payload_files_in_path;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Where one payload is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Stdin,
    File(PathBuf),
}

impl PayloadSource {
    pub fn name(&self) -> String {
        match self {
            PayloadSource::Stdin => "<stdin>".to_string(),
            PayloadSource::File(path) => path.display().to_string(),
        }
    }
}

/// Outcome of an inspection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectSummary {
    pub decoded: usize,
    pub failed: usize,
}

impl InspectSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total(&self) -> usize {
        self.decoded + self.failed
    }
}

/// Expands CLI inputs into payload sources. `-` is stdin, directories are
/// scanned for files with the configured payload extension.
pub fn collect_sources(inputs: &[String], config: &Config) -> Result<Vec<PayloadSource>> {
    info!("Collecting payloads from {} inputs...", inputs.len());

    let mut sources = Vec::new();
    for input in inputs {
        if input == "-" {
            sources.push(PayloadSource::Stdin);
            continue;
        }

        let path = Path::new(input);
        if path.is_dir() {
            let files =
                get_payload_files_in_path(path, &config.payload_extension, config.max_depth)?;
            if files.is_empty() {
                warn!(
                    "No .{} files found in directory: {}",
                    config.payload_extension, input
                );
            }
            sources.extend(files.into_iter().map(PayloadSource::File));
        } else {
            sources.push(PayloadSource::File(path.to_path_buf()));
        }
    }

    info!("Found {} payloads", sources.len());
    Ok(sources)
}

/// Decodes every source, writing the re-encoded request to `out` unless
/// `validate_only` is set. A payload that fails to read or decode is logged
/// and counted, then the run moves on; only a failed write to `out` aborts.
pub fn inspect_sources<W: Write>(
    sources: &[PayloadSource],
    config: &Config,
    validate_only: bool,
    out: &mut W,
) -> Result<InspectSummary> {
    let mut summary = InspectSummary::default();

    for source in sources {
        let name = source.name();
        let request = match read_payload(source, config.max_payload_bytes)
            .and_then(|payload| decode_payload(&payload, &name))
        {
            Ok(request) => request,
            Err(e) => {
                warn!("{}", e);
                summary.failed += 1;
                continue;
            }
        };

        log_request(&name, &request, config);
        summary.decoded += 1;

        if !validate_only {
            let encoded = encode(&request, config.wire_naming, config.pretty)?;
            writeln!(out, "{}", encoded)?;
        }
    }

    info!(
        "Inspected {} payloads: {} decoded, {} failed",
        summary.total(),
        summary.decoded,
        summary.failed
    );
    Ok(summary)
}

fn log_request(name: &str, request: &EditBackupRequest, config: &Config) {
    let storage_config = request
        .replacement_storage_config_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unchanged".to_string());

    info!(
        "{}: {}={} {}={}",
        name,
        config.wire_naming.retention_field(),
        request.retention_override_millis,
        config.wire_naming.storage_config_field(),
        storage_config
    );
}

fn read_payload(source: &PayloadSource, limit: u64) -> Result<Vec<u8>> {
    match source {
        PayloadSource::Stdin => read_limited(io::stdin().lock(), &source.name(), limit),
        PayloadSource::File(path) => {
            let read_error = |cause| EditBackupError::PayloadRead {
                source_name: source.name(),
                cause,
            };

            let size = fs::metadata(path).map_err(read_error)?.len();
            if size > limit {
                return Err(EditBackupError::PayloadTooLarge {
                    source_name: source.name(),
                    size,
                    limit,
                });
            }

            debug!("Reading {} bytes from {}", size, path.display());
            let file = fs::File::open(path).map_err(read_error)?;
            read_limited(file, &source.name(), limit)
        }
    }
}

/// Reads at most `limit` bytes, failing if the reader holds more
fn read_limited<R: Read>(reader: R, source_name: &str, limit: u64) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut payload)
        .map_err(|cause| EditBackupError::PayloadRead {
            source_name: source_name.to_string(),
            cause,
        })?;

    if payload.len() as u64 > limit {
        return Err(EditBackupError::PayloadTooLarge {
            source_name: source_name.to_string(),
            size: payload.len() as u64,
            limit,
        });
    }
    Ok(payload)
}
