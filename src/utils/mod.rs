use chrono::{DateTime, Utc};

/// Human-readable span between two instants, e.g. "2d 3h" or "45s"
pub fn format_duration_human(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let duration = to.signed_duration_since(from);
    let total = duration.num_seconds();

    if total < 0 {
        return "0s".to_string();
    }

    let days = duration.num_days();
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;

    if days > 0 {
        if hours > 0 {
            format!("{}d {}h", days, hours)
        } else {
            format!("{}d", days)
        }
    } else if hours > 0 {
        if minutes > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", total)
    }
}
