//! 编排层
//!
//! 持有配置和后端客户端，把每个命令分派给对应的流程/服务，
//! 并负责把结果输出到终端。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::{info, warn};

use crate::config::Config;
use crate::logger;
use crate::models::backend::FeedbackRequest;
use crate::models::quiz::OPTION_LETTERS;
use crate::models::{
    load_answer_map, load_quiz_file, load_source_text, AnswerMap, PlanRequest, SummaryStyle,
};
use crate::services::{BackendClient, PlanWriter};
use crate::workflow::{CardFace, ChatSession, FlashcardDeck, PlanFlow, PlanSource, QuizSession};

/// 命令行子命令
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 生成学习计划（后端不可用时使用本地模板）
    Plan {
        /// 学习主题
        topic: String,
        /// 计划天数
        #[arg(short, long)]
        days: Option<u32>,
        /// 不请求后端，直接使用本地模板
        #[arg(long)]
        offline: bool,
        /// 保存为 txt 文件
        #[arg(long)]
        save: bool,
    },
    /// 为测验作答计分
    Score {
        /// 测验文件（JSON 或 TOML）
        #[arg(short, long)]
        quiz: PathBuf,
        /// 作答，形如 `0=2,1=0`，或 JSON 作答文件路径
        #[arg(short, long)]
        answers: String,
    },
    /// 根据文本生成测验题
    Quiz {
        #[arg(short, long)]
        text_file: PathBuf,
        #[arg(short, long)]
        count: Option<usize>,
        /// 保存为 JSON 文件
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// 根据文本生成闪卡
    Flashcards {
        #[arg(short, long)]
        text_file: PathBuf,
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// 总结已上传的文档
    Summarize {
        #[arg(short, long)]
        doc: String,
        /// simple / detailed / concept / qa / takeaways
        #[arg(short, long, default_value = "simple")]
        style: SummaryStyle,
    },
    /// 列出已上传的文档
    Docs,
    /// 检查后端是否在线
    Health,
    /// 向聊天导师提问
    Chat {
        message: String,
        /// 参考的文档，可重复
        #[arg(short, long = "doc")]
        docs: Vec<String>,
    },
    /// 提交反馈
    Feedback {
        #[arg(long)]
        feature: String,
        #[arg(long)]
        item: String,
        #[arg(long, default_value_t = 0)]
        rating: u32,
        #[arg(long)]
        thumbs_up: bool,
        #[arg(long, default_value = "")]
        note: String,
    },
}

/// 应用主结构
pub struct App {
    config: Config,
    backend: BackendClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logger::log_startup(&config);
        let backend = BackendClient::new(&config).context("无法创建后端客户端")?;
        Ok(Self { config, backend })
    }

    /// 执行一个命令
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Plan {
                topic,
                days,
                offline,
                save,
            } => {
                let days = days.unwrap_or(self.config.default_plan_days);
                self.plan(&topic, days, offline, save).await
            }
            Command::Score { quiz, answers } => self.score(&quiz, &answers).await,
            Command::Quiz {
                text_file,
                count,
                out,
            } => {
                let count = count.unwrap_or(self.config.quiz_num_questions);
                self.quiz(&text_file, count, out.as_deref()).await
            }
            Command::Flashcards { text_file, count } => {
                let count = count.unwrap_or(self.config.flashcard_count);
                self.flashcards(&text_file, count).await
            }
            Command::Summarize { doc, style } => self.summarize(&doc, style).await,
            Command::Docs => self.docs().await,
            Command::Health => self.health().await,
            Command::Chat { message, docs } => self.chat(&message, &docs).await,
            Command::Feedback {
                feature,
                item,
                rating,
                thumbs_up,
                note,
            } => {
                let feedback = FeedbackRequest {
                    feature,
                    item_name: item,
                    thumbs_up: u32::from(thumbs_up),
                    rating,
                    note,
                };
                self.feedback(&feedback).await
            }
        }
    }

    async fn plan(&self, topic: &str, days: u32, offline: bool, save: bool) -> Result<()> {
        let request = PlanRequest::new(topic, days)?;

        let outcome = if offline {
            PlanFlow::<BackendClient>::offline().run(&request).await
        } else {
            PlanFlow::new(&self.backend).run(&request).await
        };

        if outcome.source == PlanSource::Fallback {
            info!("✨ 使用内置学习计划模板");
        }
        println!("{}", outcome.text);

        if save {
            let writer = PlanWriter::new(&self.config.plan_output_dir);
            let path = writer.write(&request, &outcome.text).await?;
            info!("💾 计划已保存至: {}", path.display());
        }

        Ok(())
    }

    async fn score(&self, quiz_path: &Path, answers: &str) -> Result<()> {
        let quiz = load_quiz_file(quiz_path).await?;

        let answers_path = Path::new(answers);
        let answers: AnswerMap = if answers_path.is_file() {
            load_answer_map(answers_path).await?
        } else {
            answers.parse()?
        };

        let mut session = QuizSession::new(quiz);
        session.select_all(&answers)?;
        let result = session.submit();

        for (index, item) in session.quiz().iter().enumerate() {
            let mark = match (session.answers().get(index), item.answer) {
                (Some(selected), Some(key)) if key.matches(selected) => "✅",
                (Some(_), Some(_)) => "❌",
                _ => "➖",
            };
            println!("{} {}. {}", mark, index + 1, item.question);
        }
        println!("{} ({}%)", result, result.percentage());

        Ok(())
    }

    async fn quiz(&self, text_file: &Path, count: usize, out: Option<&Path>) -> Result<()> {
        let text = load_source_text(text_file).await?;
        let quiz = self.backend.generate_quiz(&text, count).await?;

        if quiz.is_empty() {
            warn!("⚠️ 后端没有返回任何题目");
            return Ok(());
        }

        for (index, item) in quiz.iter().enumerate() {
            if !item.key_in_range() {
                warn!("⚠️ 第 {} 题的答案无法对应到任何选项", index + 1);
            }
            println!("{}. {}", index + 1, item.question);
            for (letter, option) in OPTION_LETTERS.iter().zip(&item.options) {
                println!("   {}) {}", letter, option);
            }
        }

        if let Some(out) = out {
            let json = serde_json::to_string_pretty(&serde_json::json!({ "quiz": quiz }))?;
            tokio::fs::write(out, json)
                .await
                .with_context(|| format!("无法写入测验文件: {}", out.display()))?;
            info!("💾 测验已保存至: {}", out.display());
        }

        Ok(())
    }

    async fn flashcards(&self, text_file: &Path, count: usize) -> Result<()> {
        let text = load_source_text(text_file).await?;
        let cards = self.backend.generate_flashcards(&text, count).await?;

        let mut deck = FlashcardDeck::new(cards);
        if deck.is_empty() {
            warn!("⚠️ 后端没有返回任何闪卡");
            return Ok(());
        }

        loop {
            let (position, total) = deck.position();
            if let Some(CardFace::Front(front)) = deck.current() {
                println!("[{}/{}] {}", position, total, front);
            }
            deck.flip();
            if let Some(CardFace::Back(back)) = deck.current() {
                println!("      → {}", back);
            }
            if position == total {
                break;
            }
            deck.next_card();
        }

        Ok(())
    }

    async fn summarize(&self, doc: &str, style: SummaryStyle) -> Result<()> {
        info!("📝 以 {} 风格总结: {}", style.label(), doc);
        let response = self.backend.summarize(doc, style).await?;

        if response.answer.trim().is_empty() {
            println!("No summary generated");
        } else {
            println!("{}", response.answer);
        }
        Ok(())
    }

    async fn docs(&self) -> Result<()> {
        let docs = self.backend.list_documents().await?;
        if docs.is_empty() {
            println!("No documents uploaded yet.");
        }
        for doc in docs {
            println!("{}\t{}", doc.id, doc.name);
        }
        Ok(())
    }

    async fn health(&self) -> Result<()> {
        let status = self
            .backend
            .health()
            .await
            .context("后端健康检查失败")?;
        info!("✓ 后端在线");
        println!("{}", status);
        Ok(())
    }

    async fn chat(&self, message: &str, docs: &[String]) -> Result<()> {
        let mut session = ChatSession::new();
        for doc in docs {
            session.toggle_document(doc);
        }

        match session.send(&self.backend, message).await {
            Some(reply) => println!("{}", reply),
            None => warn!("⚠️ 消息为空，未发送"),
        }
        Ok(())
    }

    async fn feedback(&self, feedback: &FeedbackRequest) -> Result<()> {
        let response = self.backend.send_feedback(feedback).await?;
        println!("{} (total: {})", response.message, response.count);
        Ok(())
    }
}
