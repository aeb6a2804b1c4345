use reddit_cm_domain::ImportSummary;
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn to_json<T: Serialize>(response: &CliResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"error":"failed to encode response: {}"}}"#,
            e
        )
    })
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", to_json(&response));
}

/// Outputs an error response to stderr and terminates the process with code 1.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", to_json(&response));
    std::process::exit(1);
}

/// Routes user-facing messages to text or JSON output.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    json: bool,
}

impl Reporter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Progress line. Suppressed in JSON mode so stdout stays parseable.
    pub fn status(&self, message: impl AsRef<str>) {
        if !self.json {
            println!("{}", message.as_ref());
        }
    }

    pub fn result<T: Serialize>(&self, data: T) {
        if self.json {
            output_success(data);
        }
    }

    pub fn summary(&self, summary: &ImportSummary) {
        if self.json {
            output_success(summary);
        } else {
            print!("{}", render_summary(summary));
        }
    }
}

pub fn render_summary(summary: &ImportSummary) -> String {
    let rule = "=".repeat(50);
    let counts = summary.counts();
    let mut out = format!("\n{rule}\nIMPORT SUMMARY\n{rule}\n");

    out.push_str(&format!(
        "{}: {} communities\n",
        summary.joined_label(),
        counts.joined
    ));

    let already_joined = summary.already_joined();
    if !already_joined.is_empty() {
        out.push_str(&format!(
            "\nAlready joined: {} communities\n",
            already_joined.len()
        ));
        for name in already_joined {
            out.push_str(&format!("  - r/{}\n", name));
        }
    }

    let failed = summary.failed();
    if !failed.is_empty() {
        out.push_str(&format!("\nFailed to join: {} communities\n", failed.len()));
        for (name, reason) in failed {
            out.push_str(&format!("  - r/{}: {}\n", name, reason));
        }
    }

    if counts.skipped > 0 {
        out.push_str(&format!(
            "\nSkipped: {} entries (missing name)\n",
            counts.skipped
        ));
    }

    out.push_str(&format!(
        "\nTotal processed: {} communities\n",
        summary.total_processed()
    ));
    out
}
