use tokio::sync::broadcast;

/// Сигнал «данные списка изменились»: после успешного действия
/// публикуется путь представления, которое UI должен перечитать.
#[derive(Debug, Clone)]
pub struct Revalidator {
    sender: broadcast::Sender<String>,
}

impl Revalidator {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    pub fn revalidate(&self, path: &str) {
        tracing::info!("Revalidate {}", path);
        // подписчиков может не быть, это нормально
        let _ = self.sender.send(path.to_string());
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }
}

impl Default for Revalidator {
    fn default() -> Self {
        Self::new()
    }
}
