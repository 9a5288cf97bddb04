//! Error types for the form
//!
//! Every error is handled locally by the UI. The `Display` text of the
//! user-facing errors is the exact message shown in the alert or toast.
//! Errors carried inside iced messages must be `Clone`, so I/O failures
//! are flattened to strings.

use std::path::PathBuf;
use thiserror::Error;

/// Failure turning a picked or dropped file into a preview
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The declared media type is not `image/*`
    #[error("Por favor, selecione uma imagem válida.")]
    InvalidFileType { path: PathBuf, media_type: String },

    /// The file could not be read from disk
    #[error("Não foi possível ler a imagem selecionada.")]
    Read { path: PathBuf, reason: String },
}

/// Form validation failure, checked in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, selecione uma imagem.")]
    MissingImage,

    #[error("Por favor, insira um número de telefone válido.")]
    InvalidPhone { digits: usize },

    #[error("Por favor, insira um prompt.")]
    EmptyPrompt,
}

/// Failure while delivering a submission to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Erro ao enviar a mensagem. Tente novamente.")]
    Delivery { reason: String },
}

/// Why a submit request did not start a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// A submission is already in flight
    #[error("submission already in progress")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Failure loading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
