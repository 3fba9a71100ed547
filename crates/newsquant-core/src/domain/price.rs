//! 일봉 가격 데이터.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{DecimalExt, Price, Ticker};

/// 일봉 OHLCV 데이터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// 거래일
    pub date: NaiveDate,
    /// 시가
    pub open: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 종가
    pub close: Price,
    /// 거래량
    pub volume: u64,
}

/// 한 종목의 날짜순 가격 시계열.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// 종목 티커
    pub ticker: Ticker,
    /// 날짜 오름차순으로 정렬된 일봉
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// 가격 시계열을 생성합니다. 일봉은 날짜 오름차순으로 정렬됩니다.
    pub fn new(ticker: Ticker, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|bar| bar.date);
        Self { ticker, bars }
    }

    /// 일봉 목록을 반환합니다.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// 일봉 개수.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// 종가 목록.
    pub fn closes(&self) -> Vec<Price> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    /// 일간 수익률(%) 계산.
    ///
    /// 직전 일봉 종가 대비 변화율이며, 첫 일봉과 직전 종가가 0인 경우는 None입니다.
    pub fn daily_returns(&self) -> Vec<Option<f64>> {
        let mut returns = Vec::with_capacity(self.bars.len());
        if self.bars.is_empty() {
            return returns;
        }
        returns.push(None);
        returns.extend(
            self.bars
                .windows(2)
                .map(|w| w[0].close.pct_change_to(w[1].close)),
        );
        returns
    }
}
