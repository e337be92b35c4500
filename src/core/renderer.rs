//! Query → launcher item list.
//!
//! `render` never fails: every branch that talks to the API folds its
//! error into a single error item, so the launcher always receives a
//! well-formed list.

use crate::api::{ApiResult, AttendanceApi};
use crate::core::formatter::ResponseFormatter;
use crate::models::check_type::CheckType;
use crate::models::item::{Item, ItemList};
use crate::utils::date::{format_date, parse_date, yesterday_of};
use crate::utils::truncate_chars;
use chrono::NaiveDate;
use std::fmt::Display;
use tracing::{debug, warn};

/// Error text kept in per-branch error items.
pub const BRANCH_ERROR_LIMIT: usize = 50;
/// Error text kept in the outer catch-all item.
pub const GENERAL_ERROR_LIMIT: usize = 60;

const VIEW_PREFIX: &str = "view:";

/// The five mutually exclusive response modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode<'q> {
    Menu,
    View(&'q str),
    Action(CheckType),
    DateEntry(&'q str),
    Suggest,
}

impl<'q> QueryMode<'q> {
    pub fn parse(query: &'q str) -> Self {
        let q = query.trim();

        if q.is_empty() {
            return QueryMode::Menu;
        }

        if let Some(date) = q.strip_prefix(VIEW_PREFIX) {
            return QueryMode::View(date);
        }

        if let Some(kind) = CheckType::from_keyword(q) {
            return QueryMode::Action(kind);
        }

        if q.starts_with("20") && q.chars().count() == 10 {
            return QueryMode::DateEntry(q);
        }

        QueryMode::Suggest
    }
}

pub struct ItemListRenderer<'a, A: AttendanceApi + ?Sized> {
    api: &'a A,
    today: NaiveDate,
}

impl<'a, A: AttendanceApi + ?Sized> ItemListRenderer<'a, A> {
    pub fn new(api: &'a A, today: NaiveDate) -> Self {
        Self { api, today }
    }

    pub fn render(&self, query: &str) -> ItemList {
        let mode = QueryMode::parse(query);
        debug!(?mode, "rendering query");

        match mode {
            QueryMode::Menu => self.menu(),
            QueryMode::View(date) => self.view(date),
            QueryMode::Action(kind) => self.action(kind),
            QueryMode::DateEntry(date) => self.date_entry(date),
            QueryMode::Suggest => self.suggest(),
        }
    }

    fn menu(&self) -> ItemList {
        let today = format_date(self.today);

        let mut items: ItemList = CheckType::ALL
            .into_iter()
            .map(|kind| {
                let (title, subtitle) = match kind {
                    CheckType::In => ("🟢 출근하기", "출근 체크인을 진행합니다"),
                    CheckType::Out => ("🔴 퇴근하기", "퇴근 체크아웃을 진행합니다"),
                    CheckType::Away => ("🟡 자리비움", "자리비움 상태로 변경합니다"),
                };
                Item::new(format!("ws-{}", kind.keyword()), title, subtitle, kind.keyword())
            })
            .collect();

        items.push(Item::new(
            format!("ws-today-{today}"),
            "📊 오늘 현황 보기",
            format!("오늘({today}) 출퇴근 현황을 조회합니다"),
            format!("{VIEW_PREFIX}{today}"),
        ));

        items
    }

    fn view(&self, date: &str) -> ItemList {
        match self.view_items(date) {
            Ok(items) => items,
            Err(e) => {
                warn!(date, error = %e, "worktime view failed");
                ItemList::single(Item::new(
                    "ws-error-view",
                    "조회 실패",
                    format!(
                        "출퇴근 현황 조회 중 오류가 발생했습니다: {}",
                        truncate_chars(&e.to_string(), BRANCH_ERROR_LIMIT)
                    ),
                    "error",
                ))
            }
        }
    }

    fn view_items(&self, date: &str) -> ApiResult<ItemList> {
        let records = self.api.fetch_worktime(date, None)?;

        if records.is_empty() {
            return Ok(ItemList::single(Item::new(
                "ws-no-data",
                "데이터 없음",
                format!("{date}에 대한 출퇴근 기록이 없습니다"),
                "none",
            )));
        }

        Ok(records
            .iter()
            .map(|record| {
                let shown = ResponseFormatter::format(record);
                let email = record.email();
                let detail = format!("detail:{email}:{date}");
                Item::new(
                    format!("ws-worktime-{email}-{date}"),
                    shown.title,
                    shown.subtitle,
                    detail.clone(),
                )
                .with_cmd("상세 정보 보기", detail)
            })
            .collect())
    }

    fn action(&self, kind: CheckType) -> ItemList {
        let keyword = kind.keyword();
        let label = kind.label();

        match self.api.submit_attendance_event(kind, None) {
            Ok(record) => ItemList::single(Item::new(
                format!("ws-success-{keyword}"),
                format!("✅ {label} 완료"),
                format!(
                    "{} ({}) - {label}이 완료되었습니다",
                    record.username(),
                    record.team_name()
                ),
                "success",
            )),
            Err(e) => {
                warn!(check_type = kind.as_str(), error = %e, "attendance event failed");
                ItemList::single(Item::new(
                    format!("ws-error-{keyword}"),
                    format!("❌ {label} 실패"),
                    format!(
                        "{label} 처리 중 오류가 발생했습니다: {}",
                        truncate_chars(&e.to_string(), BRANCH_ERROR_LIMIT)
                    ),
                    "error",
                ))
            }
        }
    }

    fn date_entry(&self, query: &str) -> ItemList {
        match parse_date(query) {
            Some(d) => {
                let date = format_date(d);
                ItemList::single(Item::new(
                    format!("ws-view-date-{date}"),
                    format!("📅 {date} 현황 조회"),
                    format!("{date}의 출퇴근 현황을 조회합니다"),
                    format!("{VIEW_PREFIX}{date}"),
                ))
            }
            None => ItemList::single(Item::new(
                "ws-invalid-date",
                "잘못된 날짜 형식",
                "날짜는 YYYY-MM-DD 형식으로 입력해주세요 (예: 2022-06-09)",
                "error",
            )),
        }
    }

    fn suggest(&self) -> ItemList {
        let today = format_date(self.today);
        let yesterday = format_date(yesterday_of(self.today));

        [
            Item::new(
                "ws-suggest-today",
                format!("📊 오늘 현황 ({today})"),
                "오늘의 출퇴근 현황을 조회합니다",
                format!("{VIEW_PREFIX}{today}"),
            ),
            Item::new(
                "ws-suggest-yesterday",
                format!("📊 어제 현황 ({yesterday})"),
                "어제의 출퇴근 현황을 조회합니다",
                format!("{VIEW_PREFIX}{yesterday}"),
            ),
            Item::new(
                "ws-suggest-date",
                "📅 특정 날짜 조회",
                "YYYY-MM-DD 형식으로 날짜를 입력하세요 (예: 2022-06-09)",
                "help",
            ),
        ]
        .into_iter()
        .collect()
    }
}

/// Outer catch-all: anything that escaped the branches (config, client
/// setup) becomes one generic error item.
pub fn general_error(err: &dyn Display) -> ItemList {
    ItemList::single(Item::new(
        "ws-general-error",
        "Wantedspace 워크플로우 오류",
        format!(
            "오류가 발생했습니다: {}",
            truncate_chars(&err.to_string(), GENERAL_ERROR_LIMIT)
        ),
        "error",
    ))
}
