use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Сколько мест максимум поддерживает один стол.
pub const MAX_TABLE_SEATS: u8 = 9;

/// Конфиг стола: сколько мест, минимальная ставка, стартовый стек, задержка ботов.
///
/// Структура блайндов одна: SB = min_bet / 2, BB = min_bet. Минимальный
/// шаг рейза тоже равен min_bet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Максимальное количество мест за столом (2–9).
    pub max_seats: u8,
    /// Минимальная ставка = большой блайнд = шаг рейза.
    pub min_bet: Chips,
    /// Стек по умолчанию для `generate_table` без явных стеков.
    pub starting_stack: Chips,
    /// Пауза перед ходом скриптового оппонента, мс.
    pub scripted_delay_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_seats: 6,
            min_bet: Chips::new(20),
            starting_stack: Chips::new(1_000),
            scripted_delay_ms: 1_200,
        }
    }
}

impl TableConfig {
    pub fn small_blind(&self) -> Chips {
        Chips(self.min_bet.0 / 2)
    }

    pub fn big_blind(&self) -> Chips {
        self.min_bet
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_seats < 2 || self.max_seats > MAX_TABLE_SEATS {
            return Err(format!(
                "TableConfig: max_seats = {}, ожидается 2..={}",
                self.max_seats, MAX_TABLE_SEATS
            ));
        }
        if self.min_bet.0 < 2 {
            return Err(format!(
                "TableConfig: min_bet = {} (нужно >= 2, иначе SB = 0)",
                self.min_bet
            ));
        }
        if self.starting_stack.is_zero() {
            return Err("TableConfig: starting_stack = 0".into());
        }
        Ok(())
    }

    /// Прочитать конфиг из JSON; отсутствующие поля берутся из `Default`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: TableConfig =
            serde_json::from_str(json).map_err(|e| format!("TableConfig: битый JSON: {e}"))?;
        config.validate()?;
        Ok(config)
    }
}
