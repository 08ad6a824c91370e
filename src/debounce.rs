//! 입력 변경이 연달아 들어올 때 재계산을 한 번으로 묶는 정책.
//!
//! 시간은 호출자가 넘겨준다. 계산 코어는 시간 개념을 갖지 않는다.

use std::time::{Duration, Instant};

/// 마지막 입력 이후 `interval`이 지나면 한 번만 재계산을 허용한다.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last_touch: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_touch: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 입력이 바뀌었음을 기록한다. 대기 중인 타이머는 다시 시작된다.
    pub fn touch(&mut self, now: Instant) {
        self.last_touch = Some(now);
    }

    /// 재계산이 대기 중인지 여부.
    pub fn is_pending(&self) -> bool {
        self.last_touch.is_some()
    }

    /// 마지막 입력 이후 `interval`이 지났으면 `true`를 한 번 돌려주고 대기를 해제한다.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_touch {
            Some(t) if now.saturating_duration_since(t) >= self.interval => {
                self.last_touch = None;
                true
            }
            _ => false,
        }
    }

    /// 재계산 시점까지 남은 시간. 대기 중이 아니면 `None`.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.last_touch
            .map(|t| self.interval.saturating_sub(now.saturating_duration_since(t)))
    }
}
