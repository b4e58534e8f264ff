//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Envelope`], [`Paginated`], [`Created`] - Wire shapes shared by every endpoint
//! - [`User`], [`Question`], [`Note`], [`Message`], [`Village`], [`Comment`] - Backend records
//! - [`SessionPhase`], [`SessionSnapshot`] - Observable login state
//! - [`Locale`], [`Theme`] - Persisted user preferences
//! - [`AppRoute`], [`View`], [`RouteMeta`] - Path-based navigation

mod chat;
mod comment;
mod envelope;
mod note;
mod preference;
mod question;
mod route;
mod session;
mod user;
mod village;
mod wire;

pub use chat::{Agent, AgentKind, Message, MessageKind, SendMessageRequest};
pub use comment::{Comment, CommentTarget, CreateCommentRequest, ReplyRequest};
pub use envelope::{Created, Envelope, Paginated};
pub use note::{CreateNoteRequest, Note, NoteCategory};
pub use preference::{Locale, Theme};
pub use question::{Answer, CreateAnswerRequest, CreateQuestionRequest, Question};
pub use route::{AppRoute, RouteMeta, View};
pub use session::{SessionPhase, SessionSnapshot};
pub use user::{
    LoginRequest, LoginResponse, LoginStatus, RegisterRequest, RegisterResponse,
    UpdateUserRequest, User,
};
pub use village::{CreatePostRequest, Post, Village, VillageMembership};
