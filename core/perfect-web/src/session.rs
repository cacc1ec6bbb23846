//! ブラウザセッションの管理
//!
//! セッションごとに PromptSession を持ち、Cookie の UUID で引く。
//! 1 セッション内の送信は tokio::sync::Mutex で直列化し、別セッションは並行に動く。
//! 最終アクセスから TTL を過ぎたセッションは履歴ごと破棄する。

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard};
use std::time::{Duration, Instant};

use common::domain::ModelId;
use common::usecase::PromptSession;
use tokio::sync::Mutex;
use uuid::Uuid;

/// セッション識別用の Cookie 名
pub const SESSION_COOKIE: &str = "perfecter_session";

/// 1 ブラウザセッション分の状態
#[derive(Debug, Clone)]
pub struct WebSession {
    pub prompt: PromptSession,
    /// 直近に選ばれたモデル
    pub selected_model: ModelId,
    /// テキストエリアに残す入力
    pub draft: String,
}

impl WebSession {
    pub fn new(selected_model: ModelId) -> Self {
        Self {
            prompt: PromptSession::new(),
            selected_model,
            draft: String::new(),
        }
    }
}

struct Slot {
    session: Arc<Mutex<WebSession>>,
    last_seen: Instant,
}

impl Slot {
    /// 送信処理中（ロック中）のセッションは期限切れにしない
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) > ttl && self.session.try_lock().is_ok()
    }
}

/// 取り出したセッション
pub struct Checkout {
    pub id: Uuid,
    pub session: Arc<Mutex<WebSession>>,
    /// 今回新しく作った（Set-Cookie が必要）
    pub created: bool,
}

pub struct SessionRegistry {
    slots: StdMutex<HashMap<Uuid, Slot>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: StdMutex::new(HashMap::new()),
            ttl,
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<Uuid, Slot>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 既存セッションを返すか、無ければ（期限切れ・不明 ID も含め）新しく作る
    pub fn checkout(&self, id: Option<Uuid>, default_model: &ModelId) -> Checkout {
        self.checkout_at(id, default_model, Instant::now())
    }

    fn checkout_at(&self, id: Option<Uuid>, default_model: &ModelId, now: Instant) -> Checkout {
        let mut slots = self.slots();
        let ttl = self.ttl;
        slots.retain(|_, slot| !slot.is_expired(now, ttl));

        if let Some(id) = id {
            if let Some(slot) = slots.get_mut(&id) {
                slot.last_seen = now;
                return Checkout {
                    id,
                    session: Arc::clone(&slot.session),
                    created: false,
                };
            }
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(WebSession::new(default_model.clone())));
        slots.insert(
            id,
            Slot {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        Checkout {
            id,
            session,
            created: true,
        }
    }

    /// 最終アクセス時刻を更新する（送信完了時）
    pub fn touch(&self, id: Uuid) {
        self.touch_at(id, Instant::now());
    }

    fn touch_at(&self, id: Uuid, now: Instant) {
        if let Some(slot) = self.slots().get_mut(&id) {
            slot.last_seen = now;
        }
    }

    /// 期限切れのセッションを破棄し、破棄した数を返す
    pub fn evict_expired(&self) -> usize {
        self.evict_expired_at(Instant::now())
    }

    fn evict_expired_at(&self, now: Instant) -> usize {
        let mut slots = self.slots();
        let before = slots.len();
        let ttl = self.ttl;
        slots.retain(|_, slot| !slot.is_expired(now, ttl));
        before - slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots().len()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Cookie ヘッダからセッション ID を取り出す
pub fn session_id_from_cookie(cookie_header: &str) -> Option<Uuid> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Set-Cookie ヘッダの値
pub fn session_cookie(id: Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}
