//! Plain-text views of API data.

use finmate_core::attachments::Attachment;
use finmate_core::envelope::{Pagination, PaymentGoalsMeta};
use finmate_core::goals::{PaymentGoal, PaymentGoalsOverview};
use finmate_core::legal::LegalDocument;
use finmate_core::presentation::{EmptyState, EmptyStateKind, LoadState, SkeletonList};
use finmate_core::transactions::{derive_transaction_kind, Transaction};
use finmate_core::AppConfig;

const PROGRESS_WIDTH: usize = 20;

pub fn failure_line(message: &str) -> String {
    if message.trim().is_empty() {
        "! Gagal memuat data".to_string()
    } else {
        format!("! {}", message)
    }
}

/// Shared handling of the non-ready states of a list.
fn list_state<T>(
    state: &LoadState<Vec<T>>,
    kind: EmptyStateKind,
    item: impl Fn(&T) -> String,
) -> Vec<String> {
    match state {
        LoadState::Loading => SkeletonList::new(3).render(),
        LoadState::Empty => EmptyState::new(kind).render(),
        LoadState::Error(message) => vec![failure_line(message)],
        LoadState::Ready(items) => items.iter().map(item).collect(),
    }
}

fn transaction_row(transaction: &Transaction) -> String {
    let style = transaction.style();
    format!(
        "[{}] {}  {}  {}  ({})",
        style.icon,
        transaction.formatted_date,
        transaction.name,
        transaction.formatted_amount,
        derive_transaction_kind(transaction).label()
    )
}

pub fn transactions(
    state: &LoadState<Vec<Transaction>>,
    pagination: Option<&Pagination>,
) -> Vec<String> {
    let mut lines = list_state(state, EmptyStateKind::Transactions, transaction_row);
    if let (Some(pagination), LoadState::Ready(_)) = (pagination, state) {
        lines.push(format!(
            "Halaman {} dari {} ({} transaksi)",
            pagination.current_page, pagination.last_page, pagination.total
        ));
    }
    lines
}

pub fn transaction_detail(transaction: &Transaction) -> Vec<String> {
    let style = transaction.style();
    let mut lines = vec![
        format!("{} ({})", transaction.name, transaction.code),
        format!("Tanggal : {}", transaction.formatted_date),
        format!("Jumlah  : {}", transaction.formatted_amount),
        format!(
            "Jenis   : {} [{} {}]",
            derive_transaction_kind(transaction).label(),
            style.icon,
            style.color
        ),
    ];
    if transaction.has_items() {
        lines.push("Memiliki rincian item".to_string());
    }
    lines
}

fn progress_bar(goal: &PaymentGoal) -> String {
    let filled = (goal.progress_ratio() * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

fn goal_row(goal: &PaymentGoal) -> String {
    format!(
        "{}  {} {}  {}/{}  ({})",
        goal.name,
        progress_bar(goal),
        goal.formatted.progress_percent,
        goal.formatted.amount,
        goal.formatted.target_amount,
        goal.status.name
    )
}

pub fn goals(state: &LoadState<Vec<PaymentGoal>>, meta: Option<&PaymentGoalsMeta>) -> Vec<String> {
    let mut lines = list_state(state, EmptyStateKind::PaymentGoals, goal_row);
    if let (Some(meta), LoadState::Ready(_)) = (meta, state) {
        let mut footer = format!("{} target, {} halaman", meta.total_records, meta.total_pages);
        if meta.has_more_pages {
            footer.push_str(", masih ada halaman berikutnya");
        }
        lines.push(footer);
    }
    lines
}

pub fn goal_lines(goal: &PaymentGoal) -> Vec<String> {
    let mut lines = vec![goal.name.clone()];
    if let Some(description) = goal.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
    }
    lines.push(format!(
        "{} {}",
        progress_bar(goal),
        goal.formatted.progress_percent
    ));
    lines.push(format!(
        "Terkumpul {} dari {}",
        goal.formatted.amount, goal.formatted.target_amount
    ));
    lines.push(format!("Status: {}", goal.status.name));
    if let Some(target_date) = &goal.target_date {
        lines.push(format!("Target tanggal: {}", target_date));
    }
    lines
}

pub fn overview(overview: &PaymentGoalsOverview) -> Vec<String> {
    vec![
        format!("Total target : {}", overview.total_goals),
        format!("Tercapai     : {}", overview.completed),
        format!("Keberhasilan : {}", overview.success_rate),
    ]
}

fn attachment_row(attachment: &Attachment) -> String {
    match &attachment.file_name {
        Some(name) => format!("#{} {} {}", attachment.id, name, attachment.url),
        None => format!("#{} {}", attachment.id, attachment.url),
    }
}

pub fn attachments(state: &LoadState<Vec<Attachment>>) -> Vec<String> {
    list_state(state, EmptyStateKind::Attachments, attachment_row)
}

pub fn legal(document: LegalDocument, config: &AppConfig) -> Vec<String> {
    vec![
        document.title().to_string(),
        document.url(config),
        format!("Pertanyaan: {}", document.contact_email(config)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(name: &str, type_id: i64) -> Transaction {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "code": "TRX-1",
            "name": name,
            "date": "2024-03-01",
            "formatted_date": "1 Mar 2024",
            "amount": 150000.0,
            "formatted_amount": "Rp 150.000",
            "type": "expense",
            "type_id": type_id
        }))
        .unwrap()
    }

    fn goal(progress: f64) -> PaymentGoal {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Dana darurat",
            "amount": 500000.0,
            "target_amount": 1000000.0,
            "progress_percent": progress,
            "status": {"id": 1, "name": "Berjalan", "color": "#3B82F6"},
            "formatted": {
                "amount": "Rp 500.000",
                "target_amount": "Rp 1.000.000",
                "progress_percent": "50%"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_transactions_show_empty_state() {
        let lines = transactions(&LoadState::Empty, None);
        assert!(lines.iter().any(|l| l.contains("Belum ada transaksi")));
    }

    #[test]
    fn test_transactions_with_pagination_footer() {
        let pagination = Pagination {
            current_page: 2,
            last_page: 3,
            total: 27,
            per_page: Some(10),
        };
        let state = LoadState::Ready(vec![transaction("Makan siang", 2)]);
        let lines = transactions(&state, Some(&pagination));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("arrow-up-circle"));
        assert!(lines[0].contains("Rp 150.000"));
        assert_eq!(lines[1], "Halaman 2 dari 3 (27 transaksi)");
    }

    #[test]
    fn test_transfer_label_from_name() {
        let detail = transaction_detail(&transaction("TF ke Budi", 3));
        assert!(detail[3].contains("swap-horizontal"));
        assert!(detail[3].starts_with("Jenis   : Transfer"));
    }

    #[test]
    fn test_error_state_line() {
        let lines = transactions(&LoadState::Error("Server sibuk".to_string()), None);
        assert_eq!(lines, vec!["! Server sibuk".to_string()]);
        assert_eq!(failure_line(""), "! Gagal memuat data");
    }

    #[test]
    fn test_progress_bar_is_clamped() {
        assert_eq!(progress_bar(&goal(50.0)), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(&goal(250.0)), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(&goal(-5.0)), format!("[{}]", "-".repeat(20)));
    }

    #[test]
    fn test_goals_footer_only_when_ready() {
        let meta = PaymentGoalsMeta {
            total_records: 12,
            total_pages: 2,
            has_more_pages: true,
            current_page: Some(1),
        };
        let ready = goals(&LoadState::Ready(vec![goal(50.0)]), Some(&meta));
        assert_eq!(
            ready.last().map(String::as_str),
            Some("12 target, 2 halaman, masih ada halaman berikutnya")
        );

        let empty = goals(&LoadState::Empty, Some(&meta));
        assert!(empty.iter().any(|l| l.contains("Belum ada target pembayaran")));
        assert!(!empty.iter().any(|l| l.contains("halaman")));
    }

    #[test]
    fn test_legal_lines() {
        let config = AppConfig::default();
        let lines = legal(LegalDocument::PrivacyPolicy, &config);
        assert_eq!(lines[0], "Kebijakan Privasi");
        assert!(lines[1].ends_with("/legal/privacy-policy.html"));
        assert!(lines[2].contains(&config.privacy_email));
    }
}
