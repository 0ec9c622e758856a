use iced::widget::image::Handle;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Length, Size, Task, Theme};
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod state;
mod thumbnail;
mod ui;

use api::fields::{categories_from, plants_from};
use api::{CatalogClient, FetchError};
use config::Config;
use state::cart::{AddOutcome, Cart};
use state::catalog::{Catalog, Selection};
use state::data::{CartItem, ItemId};
use state::donation::DonationForm;
use state::modal::DetailModal;
use thumbnail::{ThumbnailCache, ThumbnailError};

/// Main application state
struct PlantShop {
    client: CatalogClient,
    currency: String,
    /// Category bar and plant grid
    catalog: Catalog,
    /// The only state that outlives a fetch
    cart: Cart,
    modal: DetailModal,
    thumbnails: ThumbnailCache,
    donation: DonationForm,
    /// Latest acknowledgment shown in the banner
    notice: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    CategoriesLoaded(Result<Value, FetchError>),
    /// User clicked a category button
    SelectCategory(Selection),
    PlantsLoaded {
        generation: u64,
        result: Result<Value, FetchError>,
    },
    /// "Add to Cart" on a card
    AddToCart(CartItem),
    RemoveFromCart(ItemId),
    /// User clicked a plant name
    OpenDetail(Option<ItemId>),
    DetailLoaded {
        request: u64,
        id: ItemId,
        result: Result<Value, FetchError>,
    },
    /// "Add to Cart" inside the detail modal
    AddFromModal,
    CloseModal,
    ThumbnailLoaded(String, Result<Handle, ThumbnailError>),
    DonorNameChanged(String),
    DonorEmailChanged(String),
    DonorCountChanged(String),
    SubmitDonation,
    DismissNotice,
}

impl PlantShop {
    /// Create a new instance of the application and start loading categories
    fn new(config: Config) -> (Self, Task<Message>) {
        info!(api_base = %config.api_base, "🌳 Plant Shop starting");

        let mut shop = PlantShop {
            client: CatalogClient::new(config.api_base),
            currency: config.currency_symbol,
            catalog: Catalog::new(),
            cart: Cart::new(),
            modal: DetailModal::new(),
            thumbnails: ThumbnailCache::new(),
            donation: DonationForm::default(),
            notice: None,
        };

        shop.catalog.begin_categories();
        let client = shop.client.clone();
        let task = Task::perform(
            async move { client.categories().await },
            Message::CategoriesLoaded,
        );

        (shop, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategoriesLoaded(Ok(payload)) => {
                let categories = categories_from(&payload);
                info!(count = categories.len(), "categories loaded");

                self.catalog.set_categories(categories);
                // "All" is selected programmatically once the bar exists
                self.select_category(Selection::All)
            }
            Message::CategoriesLoaded(Err(err)) => {
                // The bar shows the failure inline; no plant load is started
                warn!(error = %err, "failed to load categories");
                self.catalog.fail_categories("Failed to load categories.");
                Task::none()
            }
            Message::SelectCategory(selection) => self.select_category(selection),
            Message::PlantsLoaded { generation, result } => {
                // Decode first so the grid only ever holds normalized records
                let result = result
                    .map(|payload| plants_from(&payload))
                    .map_err(|err| {
                        warn!(error = %err, "failed to load trees");
                        "Failed to load trees.".to_string()
                    });

                // Collect image URLs before the list moves into the catalog
                let urls: Vec<String> = match &result {
                    Ok(plants) => plants.iter().map(|p| p.image_url.clone()).collect(),
                    Err(_) => Vec::new(),
                };

                if !self.catalog.finish_plants(generation, result) {
                    debug!(
                        generation,
                        latest = self.catalog.generation(),
                        "dropped stale plant response"
                    );
                    return Task::none();
                }

                info!(generation, "plant grid updated");
                // Fetch thumbnails for cards not seen before
                Task::batch(urls.into_iter().map(|url| self.request_thumbnail(url)))
            }
            Message::AddToCart(item) => {
                self.add_to_cart(item);
                Task::none()
            }
            Message::RemoveFromCart(id) => {
                // The whole line goes, whatever its quantity
                if self.cart.remove(&id) {
                    info!(%id, total = self.cart.total(), "removed from cart");
                }
                Task::none()
            }
            Message::OpenDetail(id) => {
                // Show the modal right away; the fetch fills it in later
                let Some(request) = self.modal.open(id.as_ref()) else {
                    debug!("detail requested for a plant without id");
                    return Task::none();
                };
                let Some(id) = id else {
                    return Task::none();
                };

                // Load plant details in the background
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client.plant(&id).await;
                        (id, result)
                    },
                    move |(id, result)| Message::DetailLoaded { request, id, result },
                )
            }
            Message::DetailLoaded { request, id, result } => {
                if let Err(err) = &result {
                    warn!(%id, error = %err, "failed to load plant details");
                }
                // Ignore replies for a modal that was closed or retargeted
                if !self.modal.finish(request, id, result) {
                    debug!(request, "dropped stale detail response");
                    return Task::none();
                }

                // The detail image may differ from the card image

                match self.modal.detail().map(|d| d.image_url.clone()) {
                    Some(url) => self.request_thumbnail(url),
                    None => Task::none(),
                }
            }
            Message::AddFromModal => {
                // Same cart path as the card button, then dismiss
                if let Some(item) = self.modal.detail().map(|d| d.cart_item()) {
                    self.add_to_cart(item);
                    self.modal.close();
                }
                Task::none()
            }
            Message::CloseModal => {
                self.modal.close();
                Task::none()
            }
            Message::ThumbnailLoaded(url, result) => {
                // Failures are cached too, the placeholder stays
                self.thumbnails.finish(url, result);
                Task::none()
            }
            Message::DonorNameChanged(value) => {
                self.donation.name = value;
                Task::none()
            }
            Message::DonorEmailChanged(value) => {
                self.donation.email = value;
                Task::none()
            }
            Message::DonorCountChanged(value) => {
                self.donation.count = value;
                Task::none()
            }
            Message::SubmitDonation => {
                // Validation errors and the acknowledgment share the banner
                self.notice = Some(match self.donation.submit() {
                    Ok(donation) => {
                        info!(trees = donation.trees, "donation pledged");
                        donation.acknowledgment()
                    }
                    Err(err) => err.to_string(),
                });
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn select_category(&mut self, selection: Selection) -> Task<Message> {
        let Some((generation, filter)) = self.catalog.select(selection) else {
            return Task::none();
        };
        info!(generation, ?filter, "loading trees");

        let client = self.client.clone();
        Task::perform(
            async move { client.plants(&filter).await },
            move |result| Message::PlantsLoaded { generation, result },
        )
    }

    fn add_to_cart(&mut self, item: CartItem) {
        let name = item.name.clone();
        match self.cart.add(item) {
            AddOutcome::MissingId => {
                debug!(%name, "ignored add for item without id");
            }
            outcome => {
                info!(%name, ?outcome, total = self.cart.total(), "added to cart");
                self.notice = Some(format!("🌳 \"{}\" added to cart!", name));
            }
        }
    }

    fn request_thumbnail(&mut self, url: String) -> Task<Message> {
        if !self.thumbnails.request(&url) {
            return Task::none();
        }
        Task::perform(
            thumbnail::load_thumbnail(self.client.clone(), url),
            |(url, result)| Message::ThumbnailLoaded(url, result),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("Plant Shop").size(36),
            ui::spinner(self.catalog.is_busy()),
        ]
        .spacing(20)
        .align_y(iced::Alignment::Center);

        let shop = row![
            ui::catalog::category_bar(&self.catalog),
            scrollable(ui::catalog::plant_grid(&self.catalog, &self.thumbnails, &self.currency))
                .width(Length::Fill)
                .height(Length::Fill),
            ui::cart::cart_panel(&self.cart, &self.currency),
        ]
        .spacing(20)
        .height(Length::Fill);

        let content = column![
            header,
            ui::notice_banner(self.notice.as_deref()),
            shop,
            ui::donation::donation_form(&self.donation),
        ]
        .spacing(16)
        .padding(24);

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill);

        ui::modal::overlay(base, &self.modal, &self.thumbnails, &self.currency)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn main() -> iced::Result {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_tracing(config.log_json);
    if let Some(err) = config_error {
        warn!(error = %err, "using default configuration");
    }

    iced::application("Plant Shop", PlantShop::update, PlantShop::view)
        .theme(PlantShop::theme)
        .window_size(Size::new(1280.0, 860.0))
        .centered()
        .run_with(move || PlantShop::new(config))
}
