// src/app/frame_driver.rs

use std::cell::Cell;
use std::rc::Rc;

use log::info;

use crate::ecs::system::FrameTime;

/// アニメーションループを止めるための合図。🚦
///
/// Clone すると同じフラグを共有するから、ループ側に1個渡しておいて、
/// 外から `cancel()` すれば次のフレームでループが止まる。
/// ループを始めるたびに新しいトークンを作るので、古いループのトークンを
/// キャンセルしても新しいループには影響しないよ。
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// フレームの予約なし
    Idle,
    /// 画面の更新ごとに1個だけコールバックが予約されてる
    Running,
}

/// フレームの経過時間を計算して、ループの状態を管理する係。
///
/// Idle → Running は `start` (最初のクリック) の1回だけ。
/// Running 中にもう一度 `start` を呼んでも何もしない (ループを2本走らせない)。
/// `stop` するとトークンがキャンセルされて Idle に戻る。
#[derive(Debug)]
pub struct FrameDriver {
    state: DriverState,
    last_time: f64,
    token: CancellationToken,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
            last_time: 0.0,
            token: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// 今のループのトークン。ループを回す側はこれを持っておく。
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// 前のフレームのタイムスタンプ (ミリ秒)。
    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Idle なら Running にして `true` を返す。呼んだ側は最初のフレームを予約してね。
    /// もう Running なら何もしないで `false`。
    ///
    /// `now` を前回時刻として覚えるから、最初のフレームの Δt は「クリックからの時間」になる。
    pub fn start(&mut self, now: f64) -> bool {
        if self.state == DriverState::Running {
            return false;
        }
        self.token = CancellationToken::new();
        self.state = DriverState::Running;
        self.last_time = now;
        info!("FrameDriver: Idle -> Running at t={:.1}ms", now);
        true
    }

    /// ループを止める。予約済みのフレームはトークンを見て何もせずに終わる。
    pub fn stop(&mut self) {
        if self.state == DriverState::Idle {
            return;
        }
        self.token.cancel();
        self.state = DriverState::Idle;
        info!("FrameDriver: Running -> Idle");
    }

    /// フレームを1個進める。Δt を計算して、`now` を次の前回時刻として記録する。
    ///
    /// `now` が前回時刻より前なら Δt は 0 (図形が逆走しないように)。
    ///
    /// Idle の時やトークンがキャンセル済みの時は None (このフレームは何もしない、次も予約しない)。
    pub fn advance(&mut self, now: f64) -> Option<FrameTime> {
        if self.state == DriverState::Idle {
            return None;
        }
        if self.token.is_cancelled() {
            self.state = DriverState::Idle;
            return None;
        }
        // 時計が前回より戻ってたら Δt は 0 にして、前回時刻も戻さない
        let delta = (now - self.last_time).max(0.0);
        self.last_time = self.last_time.max(now);
        Some(FrameTime::new(delta, now))
    }
}
