use cofrap_shared::Authenticate;
use cofrap_shared::form::{OTP_CODE_LENGTH, OTP_CODE_PATTERN};
use cofrap_shared::workflow::{CODE_2FA, PASSWORD, USERNAME};
use yew::prelude::*;

use crate::components::{Alert, AlertKind, Button, Card, CardSection, Input};
use crate::hooks::use_workflow_form;

#[function_component(AuthUserPage)]
pub fn auth_user_page() -> Html {
    let form = use_workflow_form::<Authenticate>();
    let state = form.controller();

    html! {
        <div class="space-y-6">
            <Card
                title="Authentification"
                description="Connectez-vous avec votre nom d'utilisateur, votre mot de passe et votre code d'authentification à deux facteurs."
            >
                <form onsubmit={form.onsubmit.clone()} class="space-y-6">
                    <Input
                        label="Nom d'utilisateur"
                        name={USERNAME}
                        value={form.value(USERNAME)}
                        oninput={form.oninput(USERNAME)}
                        error={form.field_error(USERNAME)}
                        placeholder="Entrez votre nom d'utilisateur"
                        autocomplete="username"
                        required=true
                        autofocus=true
                    />

                    <Input
                        label="Mot de Passe"
                        name={PASSWORD}
                        input_type="password"
                        value={form.value(PASSWORD)}
                        oninput={form.oninput(PASSWORD)}
                        error={form.field_error(PASSWORD)}
                        placeholder="Entrez votre mot de passe"
                        autocomplete="current-password"
                        required=true
                    />

                    <Input
                        label="Code d'Authentification (2FA)"
                        id="code-2fa"
                        name={CODE_2FA}
                        value={form.value(CODE_2FA)}
                        oninput={form.oninput(CODE_2FA)}
                        error={form.field_error(CODE_2FA)}
                        placeholder="000000"
                        helper_text="Code à 6 chiffres généré par votre application d'authentification"
                        pattern={OTP_CODE_PATTERN}
                        maxlength={OTP_CODE_LENGTH}
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        aria_label="Code d'authentification à deux facteurs à 6 chiffres"
                        required=true
                    />

                    <Button button_type="submit" is_loading={state.is_loading()} class="w-full md:w-auto">
                        {"Se Connecter"}
                    </Button>
                </form>

                if let Some(error) = state.last_error() {
                    <div class="mt-6">
                        <Alert kind={AlertKind::Error}>{error.to_string()}</Alert>
                    </div>
                }

                if let Some(response) = state.last_response() {
                    <div class="mt-6">
                        if response.is_success() {
                            <Alert kind={AlertKind::Success}>
                                <div class="space-y-2">
                                    <p class="font-semibold">{response.message.clone()}</p>
                                    if let Some(token) = response.token.clone() {
                                        <div class="mt-3 p-3 bg-white rounded border border-green-200">
                                            <p class="text-xs text-gray-600 mb-1">{"Token d'authentification :"}</p>
                                            <code class="text-xs text-gray-800 break-all">{token}</code>
                                        </div>
                                    }
                                </div>
                            </Alert>
                        } else {
                            <Alert kind={AlertKind::Error}>{response.message.clone()}</Alert>
                        }
                    </div>
                }
            </Card>

            <Card title="Processus d'authentification">
                <div class="space-y-4 text-gray-700">
                    <CardSection title="1. Vérification du compte">
                        {"Le système vérifie que votre compte existe et n'est pas expiré. \
                          Les comptes expirent automatiquement après 6 mois."}
                    </CardSection>
                    <CardSection title="2. Validation du mot de passe">
                        {"Votre mot de passe est vérifié de manière sécurisée en utilisant le hachage bcrypt. \
                          Le mot de passe en clair n'est jamais stocké."}
                    </CardSection>
                    <CardSection title="3. Vérification du code 2FA">
                        {"Le code à 6 chiffres de votre application d'authentification est validé en temps réel. \
                          Chaque code n'est valable que pendant 30 secondes."}
                    </CardSection>
                    <div class="mt-4 p-4 bg-yellow-50 border border-yellow-200 rounded-lg">
                        <p class="text-sm text-yellow-800">
                            <strong>{"Note : "}</strong>
                            {"Si votre compte a expiré, vous devrez refaire la procédure d'enrôlement \
                              (génération de mot de passe et activation du 2FA)."}
                        </p>
                    </div>
                </div>
            </Card>
        </div>
    }
}
