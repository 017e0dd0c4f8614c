use std::fmt;

#[derive(Debug, Clone)]
pub enum DashboardError {
    Config(String),
    DatasetLoad(String),
    DatasetSchema(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    Server(String),
}

impl DashboardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "E001",
            DashboardError::DatasetLoad(_) => "E002",
            DashboardError::DatasetSchema(_) => "E003",
            DashboardError::FileOperation(_) => "E004",
            DashboardError::Validation(_) => "E005",
            DashboardError::NotFound(_) => "E006",
            DashboardError::Serialization(_) => "E007",
            DashboardError::Server(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "Configuration Error",
            DashboardError::DatasetLoad(_) => "Dataset Load Error",
            DashboardError::DatasetSchema(_) => "Dataset Schema Error",
            DashboardError::FileOperation(_) => "File Operation Error",
            DashboardError::Validation(_) => "Validation Error",
            DashboardError::NotFound(_) => "Resource Not Found",
            DashboardError::Serialization(_) => "Serialization Error",
            DashboardError::Server(_) => "Server Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DashboardError::Config(msg)
            | DashboardError::DatasetLoad(msg)
            | DashboardError::DatasetSchema(msg)
            | DashboardError::FileOperation(msg)
            | DashboardError::Validation(msg)
            | DashboardError::NotFound(msg)
            | DashboardError::Serialization(msg)
            | DashboardError::Server(msg) => msg,
        }
    }

    /// Colored output for server mode
    #[cfg(feature = "server")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// HTTP status used when the error reaches an API response
    #[cfg(feature = "server")]
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            DashboardError::Validation(_) => StatusCode::BAD_REQUEST,
            DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain output for CLI mode
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DashboardError {}

// 便捷的构造函数
impl DashboardError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        DashboardError::Config(msg.into())
    }

    pub fn dataset_load<T: Into<String>>(msg: T) -> Self {
        DashboardError::DatasetLoad(msg.into())
    }

    pub fn dataset_schema<T: Into<String>>(msg: T) -> Self {
        DashboardError::DatasetSchema(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DashboardError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DashboardError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        DashboardError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DashboardError::Serialization(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        DashboardError::Server(msg.into())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::FileOperation(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        // 列缺失或值无法解析都归为 schema 错误，IO 错误单独处理
        match err.kind() {
            csv::ErrorKind::Io(_) => DashboardError::DatasetLoad(err.to_string()),
            _ => DashboardError::DatasetSchema(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
