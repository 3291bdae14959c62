use paydesk_core::AppResult;
use paydesk_domain::{MenuIcon, MenuItem, MenuTree, Role, SectionKey};

/// Static menu layout shared by a group of roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFamily {
    /// Back-office layout for super admins and admins.
    Administrator,
    /// Franchise portal layout.
    Franchise,
    /// Merchant portal layout.
    Merchant,
}

/// Builds the full, unfiltered menu tree of a family for a role.
///
/// The role only matters inside the administrator family, where it selects the
/// dashboard children.
pub fn build_menu_tree(family: MenuFamily, role: Role) -> AppResult<MenuTree> {
    match family {
        MenuFamily::Administrator => administrator_menu(role),
        MenuFamily::Franchise => franchise_menu(),
        MenuFamily::Merchant => merchant_menu(),
    }
}

fn dashboard_children(role: Role) -> AppResult<Vec<MenuItem>> {
    let mut children = vec![
        MenuItem::link("Dashboard", "/dashboard")?
            .with_icon(MenuIcon::Users)
            .with_permission("Dashboard"),
    ];

    const SUPER_ADMIN_ONLY: &[Role] = &[Role::SuperAdmin];
    match role {
        Role::SuperAdmin => children.extend([
            MenuItem::link("Admin Management", "/dashboard/role-management")?
                .with_icon(MenuIcon::Users)
                .with_permission("Admin Management")
                .offered_to(SUPER_ADMIN_ONLY),
            MenuItem::link("Logs", "/dashboard/logs")?
                .with_icon(MenuIcon::Users)
                .with_permission("Logs")
                .offered_to(SUPER_ADMIN_ONLY),
            MenuItem::link("Taxes Manage", "/dashboard/taxes-management")?
                .with_icon(MenuIcon::IndianRupee)
                .with_permission("Taxes Management")
                .offered_to(SUPER_ADMIN_ONLY),
            MenuItem::link("Edit History", "/dashboard/edit-history")?
                .with_icon(MenuIcon::Users)
                .with_permission("Edit History")
                .offered_to(SUPER_ADMIN_ONLY),
            MenuItem::link("Wallet Adjustment", "/dashboard/wallet-adjustment")?
                .with_icon(MenuIcon::Users)
                .with_permission("Wallet Adjustment")
                .offered_to(SUPER_ADMIN_ONLY),
        ]),
        Role::Admin => children.push(
            MenuItem::link("My Permissions", "/dashboard/role-management")?
                .with_icon(MenuIcon::Users)
                .with_permission("My Permissions")
                .offered_to(&[Role::Admin]),
        ),
        Role::Franchise | Role::Merchant => {}
    }

    Ok(children)
}

fn administrator_menu(role: Role) -> AppResult<MenuTree> {
    let dashboard = MenuItem::group("Dashboard", dashboard_children(role)?)?
        .with_key(SectionKey::Dashboard)
        .with_icon(MenuIcon::Home)
        .with_permission("Dashboard");

    let vendors = MenuItem::group(
        "Vendors",
        vec![
            MenuItem::link("Vendor List", "/dashboard/vendors")?.with_icon(MenuIcon::Users),
            MenuItem::link("Product List", "/dashboard/inventory")?.with_icon(MenuIcon::Package),
            MenuItem::link("Vendor Rates", "/dashboard/vendors/rates")?
                .with_icon(MenuIcon::DollarSign),
        ],
    )?
    .with_key(SectionKey::Vendors)
    .with_icon(MenuIcon::Users)
    .with_permission("Vendors");

    let inventory = MenuItem::group(
        "Inventory",
        vec![
            MenuItem::link("Pricing Scheme", "/dashboard/inventory/pricing")?
                .with_icon(MenuIcon::Calculator),
            MenuItem::link("Product Scheme Assign", "/dashboard/inventory/products-assign")?
                .with_icon(MenuIcon::Calculator),
            MenuItem::link("Inventory", "/dashboard/inventory/inventory")?
                .with_icon(MenuIcon::ArrowDown),
        ],
    )?
    .with_key(SectionKey::Inventory)
    .with_icon(MenuIcon::Package)
    .with_permission("Inventory Management");

    let customers = MenuItem::group(
        "Customers",
        vec![
            MenuItem::link("Customer List", "/dashboard/customers")?.with_icon(MenuIcon::Users),
            MenuItem::link("Onboard Customer", "/dashboard/customers/onboard")?
                .with_icon(MenuIcon::UserPlus),
            MenuItem::link("Merchant Approval", "/dashboard/customers/admin-approval")?
                .with_icon(MenuIcon::UserPlus),
            MenuItem::link(
                "Products Distribution",
                "/dashboard/customers/products-distribution",
            )?
            .with_icon(MenuIcon::Package),
        ],
    )?
    .with_key(SectionKey::Customers)
    .with_icon(MenuIcon::Users)
    .with_permission("Customers");

    let payment = MenuItem::group(
        "Payment",
        vec![
            MenuItem::link("Payment Products", "/dashboard/payment/products")?
                .with_icon(MenuIcon::Layers),
            MenuItem::link("Payment Charges", "/dashboard/payment/charges")?
                .with_icon(MenuIcon::PercentDiamond),
            MenuItem::link("Payment Vendors", "/dashboard/payment/payment-vendors")?
                .with_icon(MenuIcon::Store),
            MenuItem::link(
                "Payment Vendors Credentials",
                "/dashboard/payment/payment-vendors-creds",
            )?
            .with_icon(MenuIcon::IdCard),
            MenuItem::link(
                "Payment Vendor Routing",
                "/dashboard/payment/payment-vendor-routing",
            )?
            .with_icon(MenuIcon::Router),
        ],
    )?
    .with_key(SectionKey::Payment)
    .with_icon(MenuIcon::Banknote)
    .with_permission("Payment");

    let other = MenuItem::group(
        "Other",
        vec![
            MenuItem::link("File Upload", "/dashboard/others/upload")?.with_icon(MenuIcon::Upload),
            MenuItem::link("Charge Calculation", "/dashboard/others/charges")?
                .with_icon(MenuIcon::Calculator),
            MenuItem::link("Batch Status", "/dashboard/others/batch-status")?
                .with_icon(MenuIcon::Eye),
        ],
    )?
    .with_key(SectionKey::Other)
    .with_icon(MenuIcon::CreditCard)
    .with_permission("Other");

    let reports = reports_section(&[
        ("Franchise Reports", "/dashboard/reports/franchise"),
        ("Merchant Reports", "/dashboard/reports/merchant"),
        ("Vendor Reports", "/dashboard/reports/vendor"),
        (
            "Merchant Transaction Reports",
            "/dashboard/reports/merchant-transactions",
        ),
        (
            "Franchise Transaction Report",
            "/dashboard/reports/franchise-transactions",
        ),
        ("Inward Report", "/dashboard/reports/inward"),
        ("Outward Report", "/dashboard/reports/outward"),
        ("Return Report", "/dashboard/reports/return"),
        ("Product Reports", "/dashboard/reports/product"),
        ("Stock Reports", "/dashboard/reports/stock"),
    ])?
    .with_permission("Reports");

    Ok(MenuTree::new(vec![
        dashboard, vendors, inventory, customers, payment, other, reports,
    ]))
}

fn reports_section(reports: &[(&str, &str)]) -> AppResult<MenuItem> {
    let children = reports
        .iter()
        .map(|(title, path)| {
            MenuItem::link(*title, *path).map(|item| item.with_icon(MenuIcon::BarChart))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(MenuItem::group("Reports", children)?
        .with_key(SectionKey::Reports)
        .with_icon(MenuIcon::BarChart))
}

fn franchise_menu() -> AppResult<MenuTree> {
    Ok(MenuTree::new(vec![
        MenuItem::link("Dashboard", "/dashboard")?
            .with_key(SectionKey::Dashboard)
            .with_icon(MenuIcon::Home),
        MenuItem::group(
            "Merchants",
            vec![MenuItem::link("Merchant List", "/dashboard/merchants")?.with_icon(MenuIcon::Store)],
        )?
        .with_key(SectionKey::Merchants)
        .with_icon(MenuIcon::Store),
        MenuItem::group(
            "Inventory",
            vec![
                MenuItem::link("Inward Entry", "/dashboard/customers/inward-products")?
                    .with_icon(MenuIcon::Package),
                MenuItem::link("Product List", "/dashboard/inventory/customer-products")?
                    .with_icon(MenuIcon::Package),
                MenuItem::link(
                    "Product Distribution",
                    "/dashboard/customers/products-distribution",
                )?
                .with_icon(MenuIcon::Package),
            ],
        )?
        .with_key(SectionKey::Inventory)
        .with_icon(MenuIcon::Package),
        MenuItem::link("Payout", "/dashboard/payout")?
            .with_key(SectionKey::Payout)
            .with_icon(MenuIcon::Coins),
        reports_section(&[
            (
                "Merchant Transaction Reports",
                "/dashboard/reports/merchant-transactions",
            ),
            (
                "Franchise Transaction Report",
                "/dashboard/reports/franchise-transactions",
            ),
        ])?,
    ]))
}

fn merchant_menu() -> AppResult<MenuTree> {
    Ok(MenuTree::new(vec![
        MenuItem::link("Dashboard", "/dashboard")?
            .with_key(SectionKey::Dashboard)
            .with_icon(MenuIcon::Home),
        MenuItem::group(
            "Inventory",
            vec![
                MenuItem::link("Inward Entry", "/dashboard/customers/inward-products")?
                    .with_icon(MenuIcon::Package),
                MenuItem::link("Product List", "/dashboard/inventory/customer-products")?
                    .with_icon(MenuIcon::Package),
            ],
        )?
        .with_key(SectionKey::Inventory)
        .with_icon(MenuIcon::Package),
        MenuItem::link("Bill Payment", "/dashboard/credit-card-bill-payment")?
            .with_key(SectionKey::BillPayment)
            .with_icon(MenuIcon::Banknote),
        MenuItem::link("Payout", "/dashboard/payout")?
            .with_key(SectionKey::Payout)
            .with_icon(MenuIcon::Coins),
        MenuItem::placeholder("Card Details")?
            .with_key(SectionKey::CardDetails)
            .with_icon(MenuIcon::CreditCard),
        reports_section(&[(
            "Merchant Transaction Reports",
            "/dashboard/reports/merchant-transactions",
        )])?,
    ]))
}
