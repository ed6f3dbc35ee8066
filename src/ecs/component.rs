// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// エンティティにくっつけるデータ（位置、速度、形…）は全部このトレイトを実装する。
/// 中身は空っぽのマーカートレイトで、「これは World に入れていいデータです」って印なんだ。🏷️
///
/// - `Debug`: ログに中身を出したいから
/// - `'static`: `TypeId` で型ごとのストレージを引くのに必要
pub trait Component: std::fmt::Debug + 'static {}
