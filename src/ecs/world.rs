// src/ecs/world.rs

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 型ごとのコンポーネントストレージと、そのストレージからエンティティを消すための関数のセット。
///
/// `storage` の中身は `HashMap<Entity, T>` なんだけど、型 T は登録時にしか分からないから
/// `Box<dyn Any>` で型を消して持っておく。
/// `remover` は登録時に T を覚えたまま作った関数ポインタで、destroy_entity の時に
/// 「このストレージからこのエンティティを消して！」ってお願いするのに使うよ。🧹
struct ComponentStoreEntry {
    storage: Box<dyn Any>,
    remover: fn(&mut Box<dyn Any>, Entity),
}

/// World（ワールド）は、全部のエンティティとコンポーネントを持ってる入れ物だよ！🌍
///
/// - エンティティの作成・削除
/// - コンポーネント型の登録
/// - コンポーネントの追加・取得・削除
/// - 「Position と Velocity を両方持ってるエンティティ」みたいな問い合わせ
///
/// 問い合わせ系のメソッドは、いつも ID の昇順に並べたリストを返す。
/// HashMap の順番はバラバラだから、描画順やテストの結果がブレないようにするためだよ。
pub struct World {
    entities: HashSet<Entity>,
    next_entity_id: usize,
    component_stores: HashMap<TypeId, ComponentStoreEntry>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 空っぽの World を作るよ。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを作って返す。ID は 0 から連番！
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        debug!("World: Created entity {}", entity);
        entity
    }

    /// 指定した ID でエンティティを作る。
    /// 次に払い出す ID はそれより大きくなるように進めておくよ。
    pub fn create_entity_with_id(&mut self, entity: Entity) {
        self.entities.insert(entity);
        self.next_entity_id = self.next_entity_id.max(entity.0 + 1);
        debug!("World: Created entity with specific ID {}", entity);
    }

    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 生きてるエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// エンティティと、そのエンティティにくっついてる全部のコンポーネントを削除する。
    ///
    /// 存在しないエンティティを渡された時は何もしないで `false` を返すよ。
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.entities.remove(&entity) {
            debug!("World: Attempted to destroy non-existent entity {}", entity);
            return false;
        }
        for entry in self.component_stores.values_mut() {
            (entry.remover)(&mut entry.storage, entity);
        }
        debug!("World: Destroyed entity {}", entity);
        true
    }

    /// コンポーネント型 T を使えるように登録する。
    /// 同じ型を2回登録すると、前のストレージは捨てられちゃうので警告を出すよ。⚠️
    pub fn register_component<T: Component>(&mut self) {
        let type_id = TypeId::of::<T>();
        debug!("World: Registering component type {}", std::any::type_name::<T>());

        let remover_fn: fn(&mut Box<dyn Any>, Entity) = |storage_any, entity| {
            if let Some(storage) = storage_any.downcast_mut::<HashMap<Entity, T>>() {
                storage.remove(&entity);
            }
        };

        let entry = ComponentStoreEntry {
            storage: Box::new(HashMap::<Entity, T>::new()),
            remover: remover_fn,
        };

        if self.component_stores.insert(type_id, entry).is_some() {
            warn!(
                "World: Component type {} registered twice, overwriting.",
                std::any::type_name::<T>()
            );
        }
    }

    /// エンティティにコンポーネントをくっつける。同じ型がもう付いてたら上書き。
    ///
    /// 死んでるエンティティには何もしない。
    /// 登録してない型を渡すのはプログラムのバグなので panic するよ！💥
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.is_entity_alive(entity) {
            warn!(
                "World: Tried to add {} to dead entity {}. Ignored.",
                std::any::type_name::<T>(),
                entity
            );
            return;
        }
        match self.store_mut::<T>() {
            Some(storage) => {
                storage.insert(entity, component);
            }
            None => panic!(
                "World: Component type {} not registered! Call register_component::<{}>() first.",
                std::any::type_name::<T>(),
                std::any::type_name::<T>()
            ),
        }
    }

    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store::<T>().and_then(|storage| storage.get(&entity))
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.store_mut::<T>().and_then(|storage| storage.get_mut(&entity))
    }

    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.store_mut::<T>().and_then(|storage| storage.remove(&entity))
    }

    /// コンポーネント T を持ってる、生きてるエンティティを ID 順で全部返す。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = match self.store::<T>() {
            Some(storage) => storage
                .keys()
                .copied()
                .filter(|e| self.is_entity_alive(*e))
                .collect(),
            None => Vec::new(),
        };
        entities.sort_unstable();
        entities
    }

    /// A と B を両方持ってるエンティティを ID 順で返す。
    /// システムの「必要なコンポーネントの組み合わせ」の問い合わせはこれを使うよ。
    pub fn entities_with_both<A: Component, B: Component>(&self) -> Vec<Entity> {
        let Some(b_storage) = self.store::<B>() else {
            return Vec::new();
        };
        self.get_all_entities_with_component::<A>()
            .into_iter()
            .filter(|e| b_storage.contains_key(e))
            .collect()
    }

    fn store<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
    }

    fn store_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<HashMap<Entity, T>>())
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
