use crate::core::{
    Conversion, ConfigProvider, InputRecord, InvalidInputPolicy, OutputFormat, Pipeline,
    Rejection, Storage, TransformResult,
};
use crate::domain::converter::ToRomanNumeral;
use crate::utils::error::{RomanError, Result};

pub const INLINE_ORIGIN: &str = "args";
pub const OUTPUT_STEM: &str = "roman_numerals";
pub const REJECTIONS_FILE: &str = "rejections.json";

pub struct ConversionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConversionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Splits an input file into tokens. Separators are commas, tabs and
/// whitespace; blank lines and `#` comments are skipped.
pub fn tokenize(origin: &str, content: &str) -> Vec<InputRecord> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .flat_map(|(index, line)| {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(move |token| InputRecord {
                    origin: origin.to_string(),
                    line: index + 1,
                    raw: token.to_string(),
                })
        })
        .collect()
}

/// Parses and converts one token.
pub fn convert_record(record: &InputRecord) -> Result<Conversion> {
    let raw = record.raw.trim();
    let number: i64 = raw.parse().map_err(|e: std::num::ParseIntError| RomanError::ParseError {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    let numeral = number.to_roman_numeral()?;

    Ok(Conversion { number, numeral })
}

fn render_delimited(conversions: &[Conversion], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    // Written up front so an empty batch still yields a header row.
    writer.write_record(["number", "numeral"])?;
    for conversion in conversions {
        writer.serialize(conversion)?;
    }

    writer
        .into_inner()
        .map_err(|e| RomanError::IoError(e.into_error()))
}

pub fn render(conversions: &[Conversion], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => render_delimited(conversions, b','),
        OutputFormat::Tsv => render_delimited(conversions, b'\t'),
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(conversions)?),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ConversionPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<InputRecord>> {
        let mut records: Vec<InputRecord> = self
            .config
            .numbers()
            .into_iter()
            .enumerate()
            .map(|(index, raw)| InputRecord {
                origin: INLINE_ORIGIN.to_string(),
                line: index + 1,
                raw,
            })
            .collect();

        if let Some(path) = self.config.input_file() {
            tracing::debug!("Reading numbers from: {}", self.storage.location(path));
            let data = self.storage.read_file(path).await?;
            let content = String::from_utf8_lossy(&data);
            let file_records = tokenize(path, &content);
            tracing::debug!("Found {} tokens in {}", file_records.len(), path);
            records.extend(file_records);
        }

        if records.is_empty() {
            tracing::warn!("No numbers to convert");
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<InputRecord>) -> Result<TransformResult> {
        let policy = self.config.invalid_input_policy();
        let mut result = TransformResult::default();

        for record in records {
            match convert_record(&record) {
                Ok(conversion) => {
                    tracing::trace!("{} -> {}", conversion.number, conversion.numeral);
                    result.conversions.push(conversion);
                }
                Err(e) if policy == InvalidInputPolicy::Skip => {
                    tracing::warn!("Skipping {}:{} '{}': {}", record.origin, record.line, record.raw, e);
                    result.rejections.push(Rejection {
                        origin: record.origin,
                        line: record.line,
                        raw: record.raw,
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::debug!("Rejecting {}:{} '{}'", record.origin, record.line, record.raw);
                    return Err(e);
                }
            }
        }

        Ok(result)
    }

    async fn load(&self, result: &TransformResult) -> Result<Vec<String>> {
        let formats = self.config.output_formats()?;
        let mut written = Vec::new();

        if formats.is_empty() {
            tracing::debug!("No output formats configured, nothing to write");
            return Ok(written);
        }

        for format in formats {
            let file_name = format!("{}.{}", OUTPUT_STEM, format.extension());
            let data = render(&result.conversions, format)?;
            tracing::debug!("Writing {} ({} bytes)", file_name, data.len());
            self.storage.write_file(&file_name, &data).await?;
            written.push(self.storage.location(&file_name));
        }

        if !result.rejections.is_empty() {
            let data = serde_json::to_vec_pretty(&result.rejections)?;
            self.storage.write_file(REJECTIONS_FILE, &data).await?;
            written.push(self.storage.location(REJECTIONS_FILE));
        }

        Ok(written)
    }
}
