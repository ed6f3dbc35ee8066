// src/ecs/timers.rs

use crate::ecs::entity::Entity;

/// 「このエンティティを何ミリ秒の時点で消してね」っていう予約を溜めておくキューだよ。⏰
///
/// 予約は期限の早い順に並べて持っておく。期限が同じなら予約した順。
/// 実際の削除は Scene がフレームの最初に `drain_due` を呼んでまとめてやるから、
/// フレームの途中でエンティティが消えてシステムが中途半端な状態を見ることはないよ。
///
/// 予約は取り消せない。一度入れたら必ず期限に取り出される。
#[derive(Debug, Default)]
pub struct RemovalTimers {
    pending: Vec<(f64, Entity)>,
}

impl RemovalTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// `due_at` (ミリ秒のタイムスタンプ) に `entity` を消す予約を入れる。
    pub fn schedule(&mut self, entity: Entity, due_at: f64) {
        let index = self.pending.partition_point(|(due, _)| *due <= due_at);
        self.pending.insert(index, (due_at, entity));
    }

    /// `now` までに期限が来た予約を全部取り出して、期限順に返す。
    pub fn drain_due(&mut self, now: f64) -> Vec<Entity> {
        let split = self.pending.partition_point(|(due, _)| *due <= now);
        self.pending.drain(..split).map(|(_, entity)| entity).collect()
    }

    /// 一番早い期限。予約がなければ None。
    pub fn next_due(&self) -> Option<f64> {
        self.pending.first().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
