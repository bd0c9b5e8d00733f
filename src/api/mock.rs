//! テスト用のインメモリAPI
//!
//! POSTで受け取った出品にIDを振って保持し、GETで返す。
//! 通信失敗・不正なレスポンス・任意ステータスを差し込める。

use super::ItemsApi;
use crate::error::{MercariError, Result};
use async_trait::async_trait;
use mercari_common::{ImageFile, Item, ItemsResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// POSTで受け取った内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedListing {
    pub name: String,
    pub category: String,
    pub image: ImageFile,
}

#[derive(Debug)]
enum GetReply {
    NetworkError,
    Body(String),
}

#[derive(Debug)]
enum PostReply {
    NetworkError,
    Status(u16),
}

#[derive(Debug)]
struct MockState {
    items: Vec<Item>,
    next_id: i64,
    get_replies: VecDeque<GetReply>,
    post_replies: VecDeque<PostReply>,
    held_get: Option<oneshot::Receiver<()>>,
    posts: Vec<PostedListing>,
    get_calls: usize,
}

#[derive(Debug, Clone)]
pub struct MockItemsApi {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockItemsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockItemsApi {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                items: Vec::new(),
                next_id: 1,
                get_replies: VecDeque::new(),
                post_replies: VecDeque::new(),
                held_get: None,
                posts: Vec::new(),
                get_calls: 0,
            })),
        }
    }

    pub fn with_items(self, items: Vec<Item>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
            state.items = items;
        }
        self
    }

    /// 次にPOSTされる出品のID
    pub fn with_next_id(self, id: i64) -> Self {
        self.state.lock().unwrap().next_id = id;
        self
    }

    /// 次のPOSTを指定ステータスで返す（出品は保存しない）
    pub fn respond_next_post(&self, status: u16) {
        self.state.lock().unwrap().post_replies.push_back(PostReply::Status(status));
    }

    pub fn fail_next_post(&self) {
        self.state.lock().unwrap().post_replies.push_back(PostReply::NetworkError);
    }

    pub fn fail_next_get(&self) {
        self.state.lock().unwrap().get_replies.push_back(GetReply::NetworkError);
    }

    /// 次のGETのボディを差し替える
    pub fn respond_next_get(&self, body: impl Into<String>) {
        self.state.lock().unwrap().get_replies.push_back(GetReply::Body(body.into()));
    }

    /// 次のGETを送信側が解放するまで止める
    pub fn hold_next_get(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.lock().unwrap().held_get = Some(rx);
        tx
    }

    pub fn posts(&self) -> Vec<PostedListing> {
        self.state.lock().unwrap().posts.clone()
    }

    pub fn get_calls(&self) -> usize {
        self.state.lock().unwrap().get_calls
    }

    pub fn stored_items(&self) -> Vec<Item> {
        self.state.lock().unwrap().items.clone()
    }
}

#[async_trait]
impl ItemsApi for MockItemsApi {
    async fn create_item(&self, name: &str, category: &str, image: &ImageFile) -> Result<u16> {
        let mut state = self.state.lock().unwrap();

        match state.post_replies.pop_front() {
            Some(PostReply::NetworkError) => {
                return Err(MercariError::Network("connection refused".into()));
            }
            Some(PostReply::Status(status)) => {
                state.posts.push(PostedListing {
                    name: name.to_string(),
                    category: category.to_string(),
                    image: image.clone(),
                });
                return Ok(status);
            }
            None => {}
        }

        state.posts.push(PostedListing {
            name: name.to_string(),
            category: category.to_string(),
            image: image.clone(),
        });
        let id = state.next_id;
        state.next_id += 1;
        state.items.push(Item {
            id,
            name: name.to_string(),
            category: category.to_string(),
            image_filename: image.file_name.clone(),
        });
        Ok(201)
    }

    async fn fetch_items(&self) -> Result<ItemsResponse> {
        let held = {
            let mut state = self.state.lock().unwrap();
            state.get_calls += 1;
            state.held_get.take()
        };
        if let Some(rx) = held {
            let _ = rx.await;
        }

        let mut state = self.state.lock().unwrap();
        match state.get_replies.pop_front() {
            Some(GetReply::NetworkError) => Err(MercariError::Network("connection refused".into())),
            Some(GetReply::Body(body)) => {
                ItemsResponse::parse(&body).map_err(|e| MercariError::ApiParse(e.to_string()))
            }
            None => Ok(ItemsResponse {
                items: state.items.clone(),
            }),
        }
    }
}
