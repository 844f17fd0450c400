use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use business::domain::category::model::Category;
use business::domain::logger::Logger;
use business::domain::session::use_cases::check_session::CheckSessionUseCase;
use business::domain::session::use_cases::logout::LogoutUseCase;
use business::domain::shared::value_objects::ProductId;

use crate::setup::dependency_injection::DependencyContainer;
use crate::ui::forms::{PRODUCT_FIELDS, ProductForm};
use crate::ui::messages::{IntoErrorMessage, Operation};
use crate::ui::routes::Route;
use crate::ui::views::add_product::AddProductView;
use crate::ui::views::edit_product::EditProductView;
use crate::ui::views::login::LoginView;
use crate::ui::views::products::ProductsView;

const HELP: &str = "\
Comandos:
  list                   mostrar la tabla
  reload                 actualizar productos
  filters                mostrar u ocultar filtros
  filter <campo> <valor> category, min, max, sort (name|price), order (asc|desc)
  apply                  aplicar filtros
  add                    agregar producto
  edit <id>              editar producto
  delete <id>            eliminar producto
  go <ruta>              ir a /products, /addproduct o /editproduct/<id>
  logout                 cerrar sesión
  quit                   salir
";

/// Line-oriented input plus the writer screens are printed to.
struct Console<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn error(&mut self, message: &str) -> io::Result<()> {
        self.write(&format!("! {}\n", message)).await
    }

    /// `None` once input is exhausted.
    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label).await?;
        self.lines.next_line().await
    }

    /// Prompts for a form field, keeping `current` when the answer is empty.
    async fn field(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let label = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        Ok(self.prompt(&label).await?.map(|answer| {
            let answer = answer.trim();
            if answer.is_empty() {
                current.to_string()
            } else {
                answer.to_string()
            }
        }))
    }

    async fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} (s/n) ", question)).await?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("s" | "si" | "sí" | "y" | "yes")
        ))
    }
}

/// Terminal front-end. Holds the current route and the state of the screen
/// being shown; every navigation starts the target screen from scratch.
pub struct App {
    container: DependencyContainer,
    route: Route,
    products: Option<ProductsView>,
    adding: Option<AddProductView>,
    editing: Option<EditProductView>,
}

impl App {
    pub fn new(container: DependencyContainer) -> Self {
        Self {
            container,
            route: Route::Login,
            products: None,
            adding: None,
            editing: None,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Runs screens until the user quits or input ends.
    pub async fn run<R, W>(&mut self, input: R, output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut console = Console {
            lines: input.lines(),
            output,
        };

        loop {
            let keep_going = match self.route.clone() {
                Route::Login => self.login_screen(&mut console).await?,
                Route::Products => self.products_screen(&mut console).await?,
                Route::AddProduct => self.add_product_screen(&mut console).await?,
                Route::EditProduct(id) => self.edit_product_screen(&mut console, id).await?,
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Catalog routes pass only with a live session; otherwise back to login.
    async fn navigate<R, W>(&mut self, route: Route, console: &mut Console<R, W>) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.products = None;
        self.adding = None;
        self.editing = None;

        if route.requires_session()
            && let Err(e) = self.container.check_session.execute().await
        {
            console
                .error(&e.into_error_message(Operation::CheckSession))
                .await?;
            self.route = Route::Login;
            return Ok(());
        }

        self.container
            .logger
            .debug(&format!("Navigating to {}", route));
        self.route = route;
        Ok(())
    }

    async fn login_screen<R, W>(&mut self, console: &mut Console<R, W>) -> io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        console.write("\nInicio de Sesión\n").await?;
        let Some(email) = console.prompt("Correo electrónico: ").await? else {
            return Ok(false);
        };
        let Some(password) = console.prompt("Contraseña: ").await? else {
            return Ok(false);
        };

        console.write("Iniciando sesión...\n").await?;
        let view = LoginView::new(
            self.container.login.clone(),
            self.container.check_session.clone(),
        );
        match view.submit(email.trim(), &password).await {
            Ok(route) => {
                self.products = None;
                self.route = route;
            }
            Err(message) => console.error(&message).await?,
        }
        Ok(true)
    }

    async fn products_screen<R, W>(&mut self, console: &mut Console<R, W>) -> io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.products.is_none() {
            let mut view = ProductsView::new(
                self.container.catalog_store(),
                self.container.get_all_categories.clone(),
                self.container.logger.clone(),
            );
            view.open().await;
            console.write(&view.render().await).await?;
            self.products = Some(view);
        }
        let Some(view) = self.products.as_mut() else {
            return Ok(true);
        };

        let Some(line) = console.prompt("> ").await? else {
            return Ok(false);
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let mut next = None;
        match command {
            "" => {}
            "help" => console.write(HELP).await?,
            "list" => console.write(&view.render().await).await?,
            "reload" | "apply" => {
                view.reload().await;
                console.write(&view.render().await).await?;
            }
            "filters" => {
                view.toggle_filters();
                console.write(&view.render().await).await?;
            }
            "filter" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if let Err(message) = view.set_filter(field, value.trim()) {
                    console.error(&message).await?;
                }
            }
            "add" => next = Some(Route::AddProduct),
            "edit" if !rest.is_empty() => next = Some(Route::EditProduct(ProductId::new(rest))),
            "delete" if !rest.is_empty() => {
                let id = ProductId::new(rest);
                match view.product_name(&id).await {
                    Some(name) => {
                        let question =
                            format!("¿Estás seguro de que deseas eliminar el producto {}?", name);
                        if console.confirm(&question).await? {
                            match view.delete(&id).await {
                                Ok(()) => console.write(&view.render().await).await?,
                                Err(message) => console.error(&message).await?,
                            }
                        }
                    }
                    None => console.error("Producto no encontrado").await?,
                }
            }
            "go" => match rest.parse::<Route>() {
                Ok(route) => next = Some(route),
                Err(message) => console.error(&message).await?,
            },
            "logout" => {
                if let Err(e) = self.container.logout.execute().await {
                    console
                        .error(&e.into_error_message(Operation::CheckSession))
                        .await?;
                }
                next = Some(Route::Login);
            }
            "quit" | "exit" => return Ok(false),
            _ => {
                console
                    .error(&format!("Comando desconocido: {}. Escriba help.", line))
                    .await?
            }
        }

        if let Some(route) = next {
            self.navigate(route, console).await?;
        }
        Ok(true)
    }

    async fn add_product_screen<R, W>(&mut self, console: &mut Console<R, W>) -> io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.adding.is_none() {
            let mut view = AddProductView::new(
                self.container.create_product.clone(),
                self.container.get_all_categories.clone(),
            );
            console.write("\nAñadir Producto\n").await?;
            if let Err(message) = view.open().await {
                console.error(&message).await?;
            }
            self.adding = Some(view);
        }
        let Some(view) = self.adding.as_mut() else {
            return Ok(true);
        };
        console.write(&category_choices(view.categories())).await?;

        if !fill_form(console, &mut view.form, &PRODUCT_FIELDS).await? {
            return Ok(false);
        }

        match view.submit().await {
            Ok(route) => self.navigate(route, console).await?,
            Err(message) => {
                console.error(&message).await?;
                if !console.confirm("¿Reintentar?").await? {
                    self.navigate(Route::Products, console).await?;
                }
            }
        }
        Ok(true)
    }

    async fn edit_product_screen<R, W>(
        &mut self,
        console: &mut Console<R, W>,
        id: ProductId,
    ) -> io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.editing.is_none() {
            let mut view = EditProductView::new(
                self.container.get_product_by_id.clone(),
                self.container.update_product.clone(),
                id.clone(),
            );
            console.write("Cargando producto...\n").await?;
            if let Err(message) = view.open().await {
                console.error(&message).await?;
                self.navigate(Route::Products, console).await?;
                return Ok(true);
            }
            console.write(&format!("\nEditar Producto {}\n", id)).await?;
            self.editing = Some(view);
        }
        let Some(view) = self.editing.as_mut() else {
            return Ok(true);
        };

        if !fill_form(console, &mut view.form, &PRODUCT_FIELDS[1..]).await? {
            return Ok(false);
        }

        console.write("Guardando...\n").await?;
        match view.submit().await {
            Ok(route) => self.navigate(route, console).await?,
            Err(message) => {
                console.error(&message).await?;
                if !console.confirm("¿Reintentar?").await? {
                    self.navigate(Route::Products, console).await?;
                }
            }
        }
        Ok(true)
    }
}

/// Prompts every field in order; `false` when input ran out.
async fn fill_form<R, W>(
    console: &mut Console<R, W>,
    form: &mut ProductForm,
    fields: &[(&str, &str)],
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for (field, label) in fields {
        let current = form.get(field).unwrap_or_default().to_string();
        let Some(value) = console.field(label, &current).await? else {
            return Ok(false);
        };
        if let Err(message) = form.set(field, &value) {
            console.error(&message).await?;
        }
    }
    Ok(true)
}

fn category_choices(categories: &[Category]) -> String {
    if categories.is_empty() {
        return String::new();
    }
    let choices: Vec<String> = categories
        .iter()
        .map(|category| format!("{}={}", category.id, category.name))
        .collect();
    format!("Categorías: {}\n", choices.join(", "))
}
