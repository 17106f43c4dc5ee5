use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::input::{normalize, PhoneInput};
use crate::masker::{is_bypassed, mask_normalized};
use crate::options::{resolve, MaskOptions};

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// How each input line is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// One raw phone string per line.
    #[default]
    Plain,
    /// One JSON value per line; `{"phone": ...}` objects, numbers and `null`
    /// go through the usual normalization.
    JsonLines,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub lines: u64,
    pub masked: u64,
    pub bypassed: u64,
    pub empty: u64,
    pub invalid_json: u64,
}

/// Mask every line from `reader`, writing one output line per input line.
pub async fn mask_stream<R, W>(
    reader: R,
    mut writer: W,
    options: &MaskOptions,
    format: InputFormat,
) -> Result<StreamSummary, StreamError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let resolved = resolve(Some(options));
    let mut summary = StreamSummary::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        summary.lines += 1;

        let input = match format {
            InputFormat::Plain => PhoneInput::from(line),
            InputFormat::JsonLines => match serde_json::from_str::<Value>(&line) {
                Ok(value) => PhoneInput::from(value),
                Err(e) => {
                    warn!(line = summary.lines, error = %e, "not valid JSON, masking as text");
                    summary.invalid_json += 1;
                    PhoneInput::from(line)
                }
            },
        };

        let phone = normalize(&input);
        let masked = if phone.is_empty() {
            summary.empty += 1;
            phone
        } else {
            if is_bypassed(&phone, &resolved) {
                summary.bypassed += 1;
            } else {
                summary.masked += 1;
            }
            mask_normalized(&phone, &resolved)
        };

        writer.write_all(masked.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;

    debug!(
        lines = summary.lines,
        masked = summary.masked,
        bypassed = summary.bypassed,
        "stream masked"
    );
    Ok(summary)
}

/// Mask numbers given as separate arguments, one output line each.
pub async fn mask_args<W>(
    phones: &[String],
    writer: W,
    options: &MaskOptions,
    format: InputFormat,
) -> Result<StreamSummary, StreamError>
where
    W: AsyncWrite + Unpin,
{
    let data = phones.join("\n");
    mask_stream(BufReader::new(data.as_bytes()), writer, options, format).await
}
