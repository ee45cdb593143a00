use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::analyzer::{AnalysisRequest, AnalyzerService};
use crate::config::AppConfig;
use crate::error::{AnalysisResult, AppError, AppResult};
use crate::output::derive_output_path;
use crate::transcript::{read_transcript, write_analysis, TranscriptFormat};

const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy)]
pub struct RunTiming {
    pub started: Instant,
    pub finished: Instant,
}

impl RunTiming {
    pub fn elapsed(&self) -> Duration {
        self.finished.saturating_duration_since(self.started)
    }
}

#[derive(Debug)]
pub struct SessionReport {
    pub run_id: Uuid,
    pub transcript_path: PathBuf,
    /// `None` when the transcript could not be read.
    pub format: Option<TranscriptFormat>,
    pub result: AnalysisResult,
    pub timing: RunTiming,
    pub saved_to: Option<PathBuf>,
}

impl SessionReport {
    /// The text shown and persisted: the analysis, or the error rendered as `Error...`.
    pub fn analysis_text(&self) -> String {
        match &self.result {
            Ok(analysis) => analysis.clone(),
            Err(error) => error.to_string(),
        }
    }

    pub fn render_text(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        out.push_str(&format!("\n{rule}\n"));
        out.push_str("ANÁLISIS COMPLETADO\n");
        out.push_str(&format!("{rule}\n"));
        out.push_str(&self.analysis_text());
        out.push_str(&format!("\n\n{rule}\n"));
        out.push_str(&format!(
            "Tiempo: {:.1} segundos\n",
            self.timing.elapsed().as_secs_f64()
        ));
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

pub fn usage_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n Analizador de Sesiones Terapéuticas\n{rule}\n\n\
         Uso:\n   session-analyzer <ruta_archivo>\n\n\
         Ejemplo:\n   session-analyzer ../transciption/sesion_001.txt\n   \
         session-analyzer ../transciption/sesion_001.json\n"
    )
}

/// Gates on the input file and the health probe, then reads, classifies and
/// submits the transcript. Only the gate failures are returned as `Err`; every
/// failure after the gate is carried in `SessionReport::result`.
pub fn submit_session<S: AnalyzerService>(
    transcript_path: &Path,
    analyzer: &S,
) -> AppResult<SessionReport> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("session", %run_id);
    let _entered = span.enter();

    let metadata = std::fs::metadata(transcript_path).map_err(|_| AppError::InputNotFound {
        path: transcript_path.to_path_buf(),
    })?;
    tracing::info!(
        path = %transcript_path.display(),
        bytes = metadata.len(),
        "transcript found"
    );

    if !analyzer.probe() {
        return Err(AppError::ServiceUnreachable {
            base_url: analyzer.base_url().to_owned(),
        });
    }
    tracing::info!(base_url = analyzer.base_url(), "analysis service reachable");

    let started = Instant::now();
    let mut format = None;
    let result = read_transcript(transcript_path).and_then(|transcript| {
        format = Some(transcript.format);
        tracing::info!(
            format = %transcript.format,
            bytes = transcript.byte_len(),
            chars = transcript.char_count(),
            "submitting transcript"
        );
        analyzer.analyze(&AnalysisRequest::new(transcript.contents, transcript.format))
    });
    let timing = RunTiming {
        started,
        finished: Instant::now(),
    };

    match &result {
        Ok(_) => tracing::info!(
            elapsed_secs = timing.elapsed().as_secs_f64(),
            "analysis completed"
        ),
        Err(error) => tracing::warn!(
            elapsed_secs = timing.elapsed().as_secs_f64(),
            %error,
            "analysis failed"
        ),
    }

    Ok(SessionReport {
        run_id,
        transcript_path: transcript_path.to_path_buf(),
        format,
        result,
        timing,
        saved_to: None,
    })
}

pub fn persist_report(report: &SessionReport, output_dir: &Path) -> AppResult<PathBuf> {
    let output_path = derive_output_path(&report.transcript_path, output_dir);
    write_analysis(&output_path, &report.analysis_text())?;
    Ok(output_path)
}

/// Full driver run: submit, print the report, then persist it. A failed write
/// is reported on stderr and does not turn the run into an error.
pub fn execute_session<S: AnalyzerService>(
    transcript_path: &Path,
    config: &AppConfig,
    analyzer: &S,
) -> AppResult<SessionReport> {
    let mut report = submit_session(transcript_path, analyzer)?;
    println!("{}", report.render_text());

    match persist_report(&report, &config.output.dir) {
        Ok(path) => {
            tracing::info!(run_id = %report.run_id, path = %path.display(), "analysis saved");
            println!("Guardado en: {}", path.display());
            report.saved_to = Some(path);
        }
        Err(error) => {
            tracing::error!(run_id = %report.run_id, %error, "analysis not saved");
            eprintln!("error: {error}");
        }
    }

    Ok(report)
}
