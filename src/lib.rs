//! 핵심 계산 로직(현금흐름표 생성, 평가 지표)을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod appraisal;
pub mod config;
pub mod evaluation;
pub mod i18n;
pub mod scenario;
pub mod ui_cli;
