use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::evaluation::AnalysisInputs;
use crate::scenario::Variant;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 재무 가정(세율, 자본구조, 할인율).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub tax_rate: f64,
    /// 부채 비중. 자기자본 비중은 1 - debt_share로 계산한다.
    pub debt_share: f64,
    pub cost_of_equity: f64,
    pub interest_rate: f64,
    /// 고정 요구수익률. 생략하면 WACC를 할인율로 쓴다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hurdle_rate: Option<f64>,
}

impl Default for Assumptions {
    fn default() -> Self {
        let inputs = AnalysisInputs::default();
        Self {
            tax_rate: inputs.tax_rate,
            debt_share: inputs.debt_share,
            cost_of_equity: inputs.cost_of_equity,
            interest_rate: inputs.interest_rate,
            hurdle_rate: inputs.hurdle_rate,
        }
    }
}

/// 투자안별 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    pub investment_amount: f64,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// ko / en / auto
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub assumptions: Assumptions,
    pub lease: ProjectInputs,
    pub build: ProjectInputs,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            assumptions: Assumptions::default(),
            lease: ProjectInputs {
                investment_amount: Variant::Lease.investment_range().0,
            },
            build: ProjectInputs {
                investment_amount: Variant::Build.investment_range().0,
            },
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("설정값 오류: {0}")]
    Invalid(String),
}

fn check_unit_interval(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name}은(는) 0과 1 사이여야 합니다 (입력값 {value})"
        )))
    }
}

impl Config {
    /// TOML 문자열에서 설정을 읽고 검증한다.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 각 값의 허용 범위를 검사한다. 범위 밖 값은 보정하지 않고 거부한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.assumptions;
        check_unit_interval("tax_rate", a.tax_rate)?;
        check_unit_interval("debt_share", a.debt_share)?;
        check_unit_interval("cost_of_equity", a.cost_of_equity)?;
        check_unit_interval("interest_rate", a.interest_rate)?;
        if let Some(rate) = a.hurdle_rate {
            check_unit_interval("hurdle_rate", rate)?;
        }
        for variant in Variant::ALL {
            let amount = self.investment(variant);
            if !amount.is_finite() || amount <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} 투자금은 0보다 커야 합니다 (입력값 {amount})",
                    variant.display_name()
                )));
            }
            let (low, high) = variant.investment_range();
            if amount < low || amount > high {
                warn!(
                    "{} investment {amount} is outside the usual range {low}..={high}",
                    variant.display_name()
                );
            }
        }
        Ok(())
    }

    pub fn investment(&self, variant: Variant) -> f64 {
        match variant {
            Variant::Lease => self.lease.investment_amount,
            Variant::Build => self.build.investment_amount,
        }
    }

    pub fn set_investment(&mut self, variant: Variant, amount: f64) {
        match variant {
            Variant::Lease => self.lease.investment_amount = amount,
            Variant::Build => self.build.investment_amount = amount,
        }
    }

    /// 설정 메뉴의 할인율 입력. 정확히 0이면 WACC를 쓰고, 그 외 값은 검증 대상으로 그대로 둔다.
    pub fn set_hurdle_rate(&mut self, value: f64) {
        self.assumptions.hurdle_rate = if value == 0.0 { None } else { Some(value) };
    }

    /// 비교 평가 입력으로 변환한다.
    pub fn analysis_inputs(&self) -> AnalysisInputs {
        let a = &self.assumptions;
        AnalysisInputs {
            tax_rate: a.tax_rate,
            debt_share: a.debt_share,
            cost_of_equity: a.cost_of_equity,
            interest_rate: a.interest_rate,
            hurdle_rate: a.hurdle_rate,
            lease_investment: self.lease.investment_amount,
            build_investment: self.build.investment_amount,
        }
    }

    /// 설정을 검증한 뒤 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        fs::write(path, self.to_toml_string()?)?;
        info!("config saved to {}", path.display());
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        info!("config loaded from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}
